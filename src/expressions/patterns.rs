//! Raw pattern sources for the built-in entity classes.
//!
//! Every fragment targets a finite-automaton engine: no lookaround, no
//! backreferences and no capturing groups. Word boundaries stand in for the
//! lookbehinds a backtracking engine would use.

/// Web addresses with a scheme, a `www` prefix, or a bare domain with a known TLD.
pub const URL: &str = r#"(?i:(?:https?|ftp)://[^\s<>"]*[^\s<>"'.,;:!?()\[\]{}]|www\d{0,3}\.[^\s<>"]*[^\s<>"'.,;:!?()\[\]{}]|\b[a-z0-9][a-z0-9\-]*(?:\.[a-z0-9\-]+)*\.(?:com|net|org|edu|gov|mil|info|biz|io|co|ly|tv|us|uk|de|fr|cn|ru|jp|au|ca|es|nl|eu)\b(?:/[^\s<>"]*[^\s<>"'.,;:!?()\[\]{}])?)"#;

/// Markup-like tags: `<br>`, `</b>`, `<img/>`.
pub const TAG: &str = r"</?[A-Za-z][\w\-]*\s*/?>";

pub const EMAIL: &str = r"[\w.+\-]+@[\w\-]+(?:\.[\w\-]+)*\.[A-Za-z]{2,}\b";

/// User handles: `@someone`.
pub const USER: &str = r"@\w+";

pub const HASHTAG: &str = r"#\w[\w\-]*\b";

/// Stock tickers: `$AAPL`, `$BRK.B`.
pub const CASHTAG: &str = r"\$[A-Za-z]{1,6}(?:[._][A-Za-z]{1,2})?\b";

/// North-American style numbers with an optional country prefix.
pub const PHONE: &str = r"(?:\+?\d{1,3}[\-.])?(?:\(\d{3}\)|\d{3}[\-.])\d{3}[\-.]\d{4}\b";

pub const PERCENT: &str = r"[+\-]?\d+(?:[.,]\d+)*%";

/// Currency amounts with a leading or trailing symbol and an optional magnitude suffix.
pub const MONEY: &str = r"[$€£¥₹]\d+(?:[.,]\d+)*(?:[kKmMbB]\b)?|\d+(?:[.,]\d+)*[$€£¥₹]";

/// Numeric dates (`2020-01-31`, `31/1/2020`) and month-name dates (`Jan 5th, 2021`).
pub const DATE: &str = r"\b\d{1,4}[/\-.]\d{1,2}[/\-.]\d{1,4}\b|(?i:\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s\d{1,2}(?:st|nd|rd|th)?\b(?:,?\s\d{4}\b)?)";

pub const TIME: &str = r"\b\d{1,2}(?::\d{2}){1,2}(?:\.\d+)?(?i:[ap]\.?m\b\.?)?|\b\d{1,2}(?i:[ap]\.?m\b\.?)";

/// Dotted acronyms: `U.S.A.`, `e.g.`.
pub const ACRONYM: &str = r"\b(?:[A-Za-z]\.){2,}";

/// Western faces read left to right: `:-)`, `;D`, `:'(`, `>:(`.
pub const LTR_FACE: &str = r"[<>]?[:;=][\-o*'^]?(?:\)+|\(+|[\]\[/\\|}{@3*]|[dDpPoOxX]\b)|\b[xX][dD]\b";

/// Western faces read right to left: `(-:`, `(:`.
pub const RTL_FACE: &str = r"(?:\)+|\(+|[\]\[/\\|}{@])[\-o*'^]?[:;=][<>]?";

/// Hearts, high fives, and the remaining compact emoticons.
pub const REST_EMOTICONS: &str = r"</?3+|\\o/|\^5|\^_*\^|>_*<|\-_+\-|;_+;|T_T|[oO0]_[oO0]|>\.<|<\.<|>\.>|¯\\_\(ツ\)_/¯";

/// Eastern faces: `(^_^)`, `(>_<)`, `＼(^o^)／`.
pub const EASTERN_EMOTICONS: &str = r#"[\\＼ヽ]?[(（][\^>*@°ಠ◕T;\-oO0xX~ᴗ'][_.\-ωДд▽∀□ロ﹏ー^o]{1,3}[\^<*@°ಠ◕T;\-oO0xX~ᴗ'][;'"]?[)）][/／ノ]?"#;

/// Masked profanity: `f**k`, `sh*t`, `d***`.
pub const CENSORED: &str = r"\b[A-Za-z]+\*+[A-Za-z]+\b|\b[A-Za-z]\*{2,}";

/// Starred emphasis: `*very*`, `**bold**`.
pub const EMPHASIS: &str = r"\*+\w+\*+";

pub const NUMBER: &str = r"\b\d+(?:[.,]\d+)*\b";

/// Alphabetic words with inner apostrophes, hyphens or underscores, else any word run.
pub const WORD: &str = r"[^\W\d_](?:[^\W\d_]|['\-_])+[^\W\d_]|\w+";

/// Emoji including modifier and zero-width-joiner sequences.
pub const EMOJI: &str = r"(?:\p{Emoji_Presentation}|\p{Extended_Pictographic}\x{FE0F})\p{Emoji_Modifier}?(?:\x{200D}\p{Extended_Pictographic}\x{FE0F}?\p{Emoji_Modifier}?)*";

/// Code-like calls: `exp()`, `Math.max(a,b)`.
pub const FUNCTION: &str = r"\b[A-Za-z_][\w.]*\([^\s()]*\)";

/// Unix and Windows paths with at least two segments.
pub const FILEPATH: &str = r"(?:[A-Za-z]:|~|\.{1,2})?(?:[/\\][\w.\-]+){2,}[/\\]?";

/// Every built-in class in registry order.
pub const BUILTIN: &[(&str, &str)] = &[
    ("URL", URL),
    ("TAG", TAG),
    ("EMAIL", EMAIL),
    ("USER", USER),
    ("HASHTAG", HASHTAG),
    ("CASHTAG", CASHTAG),
    ("PHONE", PHONE),
    ("PERCENT", PERCENT),
    ("MONEY", MONEY),
    ("DATE", DATE),
    ("TIME", TIME),
    ("ACRONYM", ACRONYM),
    ("LTR_FACE", LTR_FACE),
    ("RTL_FACE", RTL_FACE),
    ("REST_EMOTICONS", REST_EMOTICONS),
    ("EASTERN_EMOTICONS", EASTERN_EMOTICONS),
    ("CENSORED", CENSORED),
    ("EMPHASIS", EMPHASIS),
    ("NUMBER", NUMBER),
    ("WORD", WORD),
    ("EMOJI", EMOJI),
    ("FUNCTION", FUNCTION),
    ("FILEPATH", FILEPATH),
];
