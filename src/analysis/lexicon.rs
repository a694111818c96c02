//! Embedded English lexicon for the part-of-speech tagger
//!
//! Word to most-likely-tag table. Entries are lowercase; lookup falls back
//! from the exact token to its lowercased form. Coverage leans on closed-
//! class words plus the verbs and nouns common in meeting transcripts;
//! anything missing goes through the unknown-word heuristics in the tagger.

use crate::analysis::tagger::PosTag;

pub(crate) const LEXICON_ENTRIES: &[(&str, PosTag)] = &[
    // Determiners
    ("the", PosTag::Dt),
    ("a", PosTag::Dt),
    ("an", PosTag::Dt),
    ("this", PosTag::Dt),
    ("that", PosTag::Dt),
    ("these", PosTag::Dt),
    ("those", PosTag::Dt),
    ("each", PosTag::Dt),
    ("every", PosTag::Dt),
    ("some", PosTag::Dt),
    ("any", PosTag::Dt),
    ("no", PosTag::Dt),
    ("all", PosTag::Dt),
    ("both", PosTag::Dt),
    ("another", PosTag::Dt),
    // Prepositions and subordinating conjunctions
    ("of", PosTag::In),
    ("in", PosTag::In),
    ("on", PosTag::In),
    ("at", PosTag::In),
    ("by", PosTag::In),
    ("for", PosTag::In),
    ("with", PosTag::In),
    ("from", PosTag::In),
    ("about", PosTag::In),
    ("into", PosTag::In),
    ("over", PosTag::In),
    ("under", PosTag::In),
    ("after", PosTag::In),
    ("before", PosTag::In),
    ("during", PosTag::In),
    ("until", PosTag::In),
    ("between", PosTag::In),
    ("against", PosTag::In),
    ("through", PosTag::In),
    ("without", PosTag::In),
    ("since", PosTag::In),
    ("if", PosTag::In),
    ("because", PosTag::In),
    ("while", PosTag::In),
    ("as", PosTag::In),
    ("per", PosTag::In),
    // Infinitival "to"
    ("to", PosTag::To),
    // Coordinating conjunctions
    ("and", PosTag::Cc),
    ("or", PosTag::Cc),
    ("but", PosTag::Cc),
    ("nor", PosTag::Cc),
    ("so", PosTag::Cc),
    ("yet", PosTag::Cc),
    ("plus", PosTag::Cc),
    // Personal pronouns
    ("i", PosTag::Prp),
    ("you", PosTag::Prp),
    ("he", PosTag::Prp),
    ("she", PosTag::Prp),
    ("it", PosTag::Prp),
    ("we", PosTag::Prp),
    ("they", PosTag::Prp),
    ("me", PosTag::Prp),
    ("him", PosTag::Prp),
    ("her", PosTag::Prp),
    ("us", PosTag::Prp),
    ("them", PosTag::Prp),
    ("everyone", PosTag::Prp),
    ("someone", PosTag::Prp),
    ("anyone", PosTag::Prp),
    ("nobody", PosTag::Prp),
    // Possessive pronouns
    ("my", PosTag::PrpPoss),
    ("your", PosTag::PrpPoss),
    ("his", PosTag::PrpPoss),
    ("its", PosTag::PrpPoss),
    ("our", PosTag::PrpPoss),
    ("their", PosTag::PrpPoss),
    // Existential "there"
    ("there", PosTag::Ex),
    // Modals
    ("will", PosTag::Md),
    ("would", PosTag::Md),
    ("can", PosTag::Md),
    ("could", PosTag::Md),
    ("shall", PosTag::Md),
    ("should", PosTag::Md),
    ("may", PosTag::Md),
    ("might", PosTag::Md),
    ("must", PosTag::Md),
    ("ought", PosTag::Md),
    // Forms of "be", "have", "do"
    ("be", PosTag::Vb),
    ("am", PosTag::Vbp),
    ("is", PosTag::Vbz),
    ("are", PosTag::Vbp),
    ("was", PosTag::Vbd),
    ("were", PosTag::Vbd),
    ("been", PosTag::Vbn),
    ("being", PosTag::Vbg),
    ("have", PosTag::Vbp),
    ("has", PosTag::Vbz),
    ("had", PosTag::Vbd),
    ("having", PosTag::Vbg),
    ("do", PosTag::Vbp),
    ("does", PosTag::Vbz),
    ("did", PosTag::Vbd),
    ("done", PosTag::Vbn),
    ("doing", PosTag::Vbg),
    // Base-form verbs common in meeting transcripts
    ("submit", PosTag::Vb),
    ("review", PosTag::Vb),
    ("send", PosTag::Vb),
    ("schedule", PosTag::Vb),
    ("prepare", PosTag::Vb),
    ("finish", PosTag::Vb),
    ("complete", PosTag::Vb),
    ("discuss", PosTag::Vb),
    ("update", PosTag::Vb),
    ("follow", PosTag::Vb),
    ("assign", PosTag::Vb),
    ("share", PosTag::Vb),
    ("email", PosTag::Vb),
    ("call", PosTag::Vb),
    ("meet", PosTag::Vb),
    ("plan", PosTag::Vb),
    ("draft", PosTag::Vb),
    ("approve", PosTag::Vb),
    ("sign", PosTag::Vb),
    ("check", PosTag::Vb),
    ("verify", PosTag::Vb),
    ("confirm", PosTag::Vb),
    ("remind", PosTag::Vb),
    ("book", PosTag::Vb),
    ("fix", PosTag::Vb),
    ("create", PosTag::Vb),
    ("write", PosTag::Vb),
    ("read", PosTag::Vb),
    ("start", PosTag::Vb),
    ("stop", PosTag::Vb),
    ("begin", PosTag::Vb),
    ("close", PosTag::Vb),
    ("open", PosTag::Vb),
    ("need", PosTag::Vbp),
    ("needs", PosTag::Vbz),
    ("want", PosTag::Vbp),
    ("make", PosTag::Vb),
    ("take", PosTag::Vb),
    ("get", PosTag::Vb),
    ("give", PosTag::Vb),
    ("go", PosTag::Vb),
    ("come", PosTag::Vb),
    ("see", PosTag::Vb),
    ("know", PosTag::Vbp),
    ("think", PosTag::Vbp),
    ("agree", PosTag::Vbp),
    ("decide", PosTag::Vb),
    ("ask", PosTag::Vb),
    ("tell", PosTag::Vb),
    ("talk", PosTag::Vb),
    ("work", PosTag::Vb),
    ("ensure", PosTag::Vb),
    ("deliver", PosTag::Vb),
    ("ship", PosTag::Vb),
    ("test", PosTag::Vb),
    ("deploy", PosTag::Vb),
    ("merge", PosTag::Vb),
    ("resolve", PosTag::Vb),
    ("escalate", PosTag::Vb),
    ("postpone", PosTag::Vb),
    ("cancel", PosTag::Vb),
    ("reschedule", PosTag::Vb),
    ("present", PosTag::Vb),
    ("circulate", PosTag::Vb),
    ("finalize", PosTag::Vb),
    ("gather", PosTag::Vb),
    ("collect", PosTag::Vb),
    ("organize", PosTag::Vb),
    ("track", PosTag::Vb),
    ("measure", PosTag::Vb),
    ("estimate", PosTag::Vb),
    ("hire", PosTag::Vb),
    ("onboard", PosTag::Vb),
    ("investigate", PosTag::Vb),
    ("document", PosTag::Vb),
    ("summarize", PosTag::Vb),
    ("analyze", PosTag::Vb),
    // Inflected verbs that the suffix heuristics would misread
    ("said", PosTag::Vbd),
    ("says", PosTag::Vbz),
    ("met", PosTag::Vbd),
    ("sent", PosTag::Vbd),
    ("went", PosTag::Vbd),
    ("got", PosTag::Vbd),
    ("made", PosTag::Vbd),
    ("took", PosTag::Vbd),
    ("gave", PosTag::Vbd),
    ("came", PosTag::Vbd),
    ("wrote", PosTag::Vbd),
    ("spoke", PosTag::Vbd),
    ("agreed", PosTag::Vbd),
    ("decided", PosTag::Vbd),
    // Nouns common in meeting transcripts
    ("meeting", PosTag::Nn),
    ("meetings", PosTag::Nns),
    ("report", PosTag::Nn),
    ("reports", PosTag::Nns),
    ("budget", PosTag::Nn),
    ("deadline", PosTag::Nn),
    ("deadlines", PosTag::Nns),
    ("team", PosTag::Nn),
    ("project", PosTag::Nn),
    ("projects", PosTag::Nns),
    ("notes", PosTag::Nns),
    ("note", PosTag::Nn),
    ("agenda", PosTag::Nn),
    ("minutes", PosTag::Nns),
    ("action", PosTag::Nn),
    ("item", PosTag::Nn),
    ("items", PosTag::Nns),
    ("client", PosTag::Nn),
    ("clients", PosTag::Nns),
    ("customer", PosTag::Nn),
    ("week", PosTag::Nn),
    ("month", PosTag::Nn),
    ("quarter", PosTag::Nn),
    ("year", PosTag::Nn),
    ("day", PosTag::Nn),
    ("time", PosTag::Nn),
    ("date", PosTag::Nn),
    ("status", PosTag::Nn),
    ("progress", PosTag::Nn),
    ("issue", PosTag::Nn),
    ("issues", PosTag::Nns),
    ("risk", PosTag::Nn),
    ("risks", PosTag::Nns),
    ("decision", PosTag::Nn),
    ("decisions", PosTag::Nns),
    ("question", PosTag::Nn),
    ("questions", PosTag::Nns),
    ("summary", PosTag::Nn),
    ("transcript", PosTag::Nn),
    ("proposal", PosTag::Nn),
    ("contract", PosTag::Nn),
    ("invoice", PosTag::Nn),
    ("design", PosTag::Nn),
    ("release", PosTag::Nn),
    ("launch", PosTag::Nn),
    ("feedback", PosTag::Nn),
    ("goal", PosTag::Nn),
    ("goals", PosTag::Nns),
    ("people", PosTag::Nns),
    ("person", PosTag::Nn),
    ("thing", PosTag::Nn),
    ("things", PosTag::Nns),
    ("way", PosTag::Nn),
    ("point", PosTag::Nn),
    ("end", PosTag::Nn),
    ("everyone's", PosTag::Nn),
    // Adjectives
    ("new", PosTag::Jj),
    ("next", PosTag::Jj),
    ("last", PosTag::Jj),
    ("first", PosTag::Jj),
    ("final", PosTag::Jj),
    ("good", PosTag::Jj),
    ("great", PosTag::Jj),
    ("important", PosTag::Jj),
    ("urgent", PosTag::Jj),
    ("ready", PosTag::Jj),
    ("late", PosTag::Jj),
    ("early", PosTag::Jj),
    ("other", PosTag::Jj),
    ("same", PosTag::Jj),
    ("main", PosTag::Jj),
    ("key", PosTag::Jj),
    ("big", PosTag::Jj),
    ("small", PosTag::Jj),
    ("high", PosTag::Jj),
    ("low", PosTag::Jj),
    // Adverbs
    ("not", PosTag::Rb),
    ("n't", PosTag::Rb),
    ("very", PosTag::Rb),
    ("also", PosTag::Rb),
    ("now", PosTag::Rb),
    ("then", PosTag::Rb),
    ("soon", PosTag::Rb),
    ("today", PosTag::Rb),
    ("tomorrow", PosTag::Rb),
    ("yesterday", PosTag::Rb),
    ("here", PosTag::Rb),
    ("again", PosTag::Rb),
    ("still", PosTag::Rb),
    ("just", PosTag::Rb),
    ("already", PosTag::Rb),
    ("always", PosTag::Rb),
    ("never", PosTag::Rb),
    ("maybe", PosTag::Rb),
    ("perhaps", PosTag::Rb),
    ("together", PosTag::Rb),
    ("up", PosTag::Rb),
    ("out", PosTag::Rb),
    ("back", PosTag::Rb),
    ("off", PosTag::Rb),
    ("down", PosTag::Rb),
    // Interjections and politeness markers
    ("please", PosTag::Uh),
    ("thanks", PosTag::Uh),
    ("okay", PosTag::Uh),
    ("ok", PosTag::Uh),
    ("yes", PosTag::Uh),
    ("hello", PosTag::Uh),
    ("hi", PosTag::Uh),
    ("right", PosTag::Uh),
    ("well", PosTag::Uh),
];
