use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("null", TokenKind::Null);
        map.insert("this", TokenKind::This);
        map.insert("new", TokenKind::New);
        map.insert("catch", TokenKind::Catch);
        map.insert("class", TokenKind::Class);
        map.insert("enum", TokenKind::Enum);
        map.insert("sealed", TokenKind::Sealed);
        map.insert("uninstantiable", TokenKind::Uninstantiable);
        map.insert("constructor", TokenKind::Constructor);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("for", TokenKind::For);
        map.insert("foreach", TokenKind::Foreach);
        map.insert("in", TokenKind::In);
        map.insert("assert", TokenKind::Assert);
        map.insert("break", TokenKind::Break);
        map.insert("continue", TokenKind::Continue);
        map.insert("return", TokenKind::Return);
        map.insert("typedef", TokenKind::Typedef);
        map.insert("override", TokenKind::Override);
        map.insert("void", TokenKind::Void);
        map.insert("global", TokenKind::Global);
        map.insert("const", TokenKind::Const);
        map.insert("functype", TokenKind::Functype);
        map.insert("funcdef", TokenKind::Funcdef);
        map.insert("static", TokenKind::Static);
        map.insert("guarded", TokenKind::Guarded);
        map.insert("is", TokenKind::Is);
        map.insert("as", TokenKind::As);
        map
    };
}

/// Terminal alphabet shared with the lexer.
///
/// The numbering is part of the contract between lexer and parser, so every
/// variant carries an explicit discriminant. Kinds above [`MAX_TERMINAL`] are
/// not grammar terminals and are skipped by the parser.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    EOF = 0,
    Identifier = 1,
    Number = 2,
    String = 3,

    // Reserved
    True = 4,
    False = 5,
    Null = 6,
    This = 7,
    New = 8,
    Catch = 9,
    Class = 10,
    Enum = 11,
    Sealed = 12,
    Uninstantiable = 13,
    Constructor = 14,
    If = 15,
    Else = 16,
    For = 17,
    Foreach = 18,
    In = 19,
    Assert = 20,
    Break = 21,
    Continue = 22,
    Return = 23,
    Typedef = 24,
    Override = 25,
    Void = 26,
    Global = 27,
    Const = 28,
    Functype = 29,
    Funcdef = 30,
    Static = 31,
    Guarded = 32,
    Is = 33,
    As = 34,

    OpenParen = 35,
    CloseParen = 36,
    OpenBracket = 37,
    CloseBracket = 38,
    OpenCurly = 39,
    CloseCurly = 40,
    Comma = 41,
    Semicolon = 42,
    Colon = 43,
    ScopeOp = 44, // ::
    Dot = 45,
    DotDot = 46,
    Question = 47,

    Assignment = 48,   // =
    PlusEquals = 49,   // +=
    MinusEquals = 50,  // -=
    StarEquals = 51,   // *=
    SlashEquals = 52,  // /=
    DotDotEquals = 53, // ..=
    LeftArrow = 54,    // <-
    Stream = 55,       // <<

    Or = 56,
    And = 57,
    Equals = 58,
    NotEquals = 59,
    Less = 60,
    Greater = 61,
    LessEquals = 62,
    GreaterEquals = 63,
    TildeEquals = 64, // ~=

    Plus = 65,
    Dash = 66,
    Star = 67,
    Slash = 68,
    Percent = 69,
    StarStar = 70,
    Not = 71,
    PlusPlus = 72,
    MinusMinus = 73,
    Hash = 74,
    Dollar = 75,

    Pragma = 76,
}

/// Highest kind that is a grammar terminal.
pub const MAX_TERMINAL: TokenKind = TokenKind::Dollar;

impl TokenKind {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_terminal(self) -> bool {
        self <= MAX_TERMINAL
    }

    /// Human readable name used in "expected" diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::EOF => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::True => "\"true\"",
            TokenKind::False => "\"false\"",
            TokenKind::Null => "\"null\"",
            TokenKind::This => "\"this\"",
            TokenKind::New => "\"new\"",
            TokenKind::Catch => "\"catch\"",
            TokenKind::Class => "\"class\"",
            TokenKind::Enum => "\"enum\"",
            TokenKind::Sealed => "\"sealed\"",
            TokenKind::Uninstantiable => "\"uninstantiable\"",
            TokenKind::Constructor => "\"constructor\"",
            TokenKind::If => "\"if\"",
            TokenKind::Else => "\"else\"",
            TokenKind::For => "\"for\"",
            TokenKind::Foreach => "\"foreach\"",
            TokenKind::In => "\"in\"",
            TokenKind::Assert => "\"assert\"",
            TokenKind::Break => "\"break\"",
            TokenKind::Continue => "\"continue\"",
            TokenKind::Return => "\"return\"",
            TokenKind::Typedef => "\"typedef\"",
            TokenKind::Override => "\"override\"",
            TokenKind::Void => "\"void\"",
            TokenKind::Global => "\"global\"",
            TokenKind::Const => "\"const\"",
            TokenKind::Functype => "\"functype\"",
            TokenKind::Funcdef => "\"funcdef\"",
            TokenKind::Static => "\"static\"",
            TokenKind::Guarded => "\"guarded\"",
            TokenKind::Is => "\"is\"",
            TokenKind::As => "\"as\"",
            TokenKind::OpenParen => "\"(\"",
            TokenKind::CloseParen => "\")\"",
            TokenKind::OpenBracket => "\"[\"",
            TokenKind::CloseBracket => "\"]\"",
            TokenKind::OpenCurly => "\"{\"",
            TokenKind::CloseCurly => "\"}\"",
            TokenKind::Comma => "\",\"",
            TokenKind::Semicolon => "\";\"",
            TokenKind::Colon => "\":\"",
            TokenKind::ScopeOp => "\"::\"",
            TokenKind::Dot => "\".\"",
            TokenKind::DotDot => "\"..\"",
            TokenKind::Question => "\"?\"",
            TokenKind::Assignment => "\"=\"",
            TokenKind::PlusEquals => "\"+=\"",
            TokenKind::MinusEquals => "\"-=\"",
            TokenKind::StarEquals => "\"*=\"",
            TokenKind::SlashEquals => "\"/=\"",
            TokenKind::DotDotEquals => "\"..=\"",
            TokenKind::LeftArrow => "\"<-\"",
            TokenKind::Stream => "\"<<\"",
            TokenKind::Or => "\"||\"",
            TokenKind::And => "\"&&\"",
            TokenKind::Equals => "\"==\"",
            TokenKind::NotEquals => "\"!=\"",
            TokenKind::Less => "\"<\"",
            TokenKind::Greater => "\">\"",
            TokenKind::LessEquals => "\"<=\"",
            TokenKind::GreaterEquals => "\">=\"",
            TokenKind::TildeEquals => "\"~=\"",
            TokenKind::Plus => "\"+\"",
            TokenKind::Dash => "\"-\"",
            TokenKind::Star => "\"*\"",
            TokenKind::Slash => "\"/\"",
            TokenKind::Percent => "\"%\"",
            TokenKind::StarStar => "\"**\"",
            TokenKind::Not => "\"!\"",
            TokenKind::PlusPlus => "\"++\"",
            TokenKind::MinusMinus => "\"--\"",
            TokenKind::Hash => "\"#\"",
            TokenKind::Dollar => "\"$\"",
            TokenKind::Pragma => "pragma",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A scanned token. `line` and `col` are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub val: String,
    pub line: u32,
    pub col: u32,
}

impl Token {
    /// The token the parser holds before anything has been scanned.
    pub fn start() -> Self {
        Token {
            kind: TokenKind::EOF,
            val: String::new(),
            line: 1,
            col: 1,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number | TokenKind::String => {
                write!(f, "{} ({}) at {}:{}", self.kind, self.val, self.line, self.col)
            }
            _ => write!(f, "{} at {}:{}", self.kind, self.line, self.col),
        }
    }
}
