//! Syntax kinds for tokens and nodes.
//!
//! Tokens come first, then keywords, then composite nodes. The ordering is
//! relied upon by the range checks below, so new variants must be added to
//! the matching section.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u16)]
pub enum SyntaxKind {
    // ---------------------------------------------------------------------
    // Tokens
    // ---------------------------------------------------------------------
    Unknown = 0,
    EndOfFileToken,
    Identifier,
    NumericLiteral,
    StringLiteral,
    CharacterLiteral,

    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    LessThanToken,
    GreaterThanToken,
    SemicolonToken,
    CommaToken,
    DotToken,
    EqualsToken,
    EqualsGreaterThanToken,
    QuestionToken,
    ColonToken,
    ColonColonToken,
    TildeToken,
    AsteriskToken,
    /// Any other operator (`+`, `==`, `&&`, `?.`, ...).
    OperatorToken,

    // ---------------------------------------------------------------------
    // Keywords
    // ---------------------------------------------------------------------
    AbstractKeyword,
    AsyncKeyword,
    AwaitKeyword,
    BaseKeyword,
    CatchKeyword,
    CheckedKeyword,
    ClassKeyword,
    ConstKeyword,
    DelegateKeyword,
    DoKeyword,
    ElseKeyword,
    EnumKeyword,
    EventKeyword,
    ExplicitKeyword,
    ExternKeyword,
    FalseKeyword,
    FinallyKeyword,
    FixedKeyword,
    ForKeyword,
    ForeachKeyword,
    IfKeyword,
    ImplicitKeyword,
    InterfaceKeyword,
    InternalKeyword,
    LockKeyword,
    NamespaceKeyword,
    NewKeyword,
    NullKeyword,
    OperatorKeyword,
    OverrideKeyword,
    PartialKeyword,
    PrivateKeyword,
    ProtectedKeyword,
    PublicKeyword,
    ReadonlyKeyword,
    ReturnKeyword,
    SealedKeyword,
    StaticKeyword,
    StructKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    UncheckedKeyword,
    UnsafeKeyword,
    UsingKeyword,
    VirtualKeyword,
    VoidKeyword,
    VolatileKeyword,
    WhileKeyword,

    // ---------------------------------------------------------------------
    // Declarations
    // ---------------------------------------------------------------------
    SourceFile,
    UsingDirective,
    NamespaceDeclaration,
    /// `class`, `struct`, `interface` and `record` declarations.
    TypeDeclaration,
    EnumDeclaration,
    DelegateDeclaration,
    AttributeList,
    ModifierList,
    MethodDeclaration,
    ConstructorDeclaration,
    ConstructorInitializer,
    OperatorDeclaration,
    PropertyDeclaration,
    AccessorList,
    AccessorDeclaration,
    FieldDeclaration,
    VariableDeclarator,
    EqualsValueClause,
    ExplicitInterfaceSpecifier,
    /// Member-level token run the parser does not model.
    IncompleteMember,
    ParameterList,
    Parameter,
    TypeParameterList,
    ConstraintClauses,
    ArrowExpressionClause,

    // ---------------------------------------------------------------------
    // Types
    // ---------------------------------------------------------------------
    PredefinedType,
    IdentifierName,
    GenericName,
    TypeArgumentList,
    QualifiedName,
    AliasQualifiedName,
    NullableType,
    ArrayType,
    ArrayRankSpecifier,
    PointerType,
    TupleType,

    // ---------------------------------------------------------------------
    // Statements
    // ---------------------------------------------------------------------
    Block,
    EmptyStatement,
    ExpressionStatement,
    /// `if`, `while`, `try`, `catch`, ... with their embedded statement.
    ControlStatement,
    /// `case ...:`, `default:` or `label:` with the statement that follows.
    LabeledStatement,
    LocalFunctionStatement,

    // ---------------------------------------------------------------------
    // Expressions
    // ---------------------------------------------------------------------
    /// A run of expression items (tokens, groups, lambdas, awaits).
    Expression,
    AwaitExpression,
    SimpleLambdaExpression,
    ParenthesizedLambdaExpression,
    AnonymousMethodExpression,
    ParenthesizedGroup,
    BracketGroup,
    BracedGroup,
}

impl SyntaxKind {
    #[inline]
    pub const fn is_token(self) -> bool {
        (self as u16) < (SyntaxKind::SourceFile as u16)
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        let raw = self as u16;
        raw >= SyntaxKind::AbstractKeyword as u16 && raw <= SyntaxKind::WhileKeyword as u16
    }

    #[inline]
    pub const fn is_node(self) -> bool {
        !self.is_token()
    }

    /// Keywords that may appear in a member or local function modifier list.
    pub const fn is_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::ExternKeyword
                | SyntaxKind::InternalKeyword
                | SyntaxKind::NewKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::PartialKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::SealedKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::UnsafeKeyword
                | SyntaxKind::VirtualKeyword
                | SyntaxKind::VolatileKeyword
        )
    }

    /// Modifiers accepted in front of a local function.
    pub const fn is_local_function_modifier(self) -> bool {
        matches!(
            self,
            SyntaxKind::AsyncKeyword
                | SyntaxKind::StaticKeyword
                | SyntaxKind::UnsafeKeyword
                | SyntaxKind::ExternKeyword
        )
    }

    /// Node kinds produced by type parsing.
    pub const fn is_type(self) -> bool {
        matches!(
            self,
            SyntaxKind::PredefinedType
                | SyntaxKind::IdentifierName
                | SyntaxKind::GenericName
                | SyntaxKind::QualifiedName
                | SyntaxKind::AliasQualifiedName
                | SyntaxKind::NullableType
                | SyntaxKind::ArrayType
                | SyntaxKind::PointerType
                | SyntaxKind::TupleType
        )
    }

    pub const fn is_lambda(self) -> bool {
        matches!(
            self,
            SyntaxKind::SimpleLambdaExpression | SyntaxKind::ParenthesizedLambdaExpression
        )
    }

    /// Map an identifier-shaped word to its keyword kind.
    ///
    /// Contextual words (`var`, `get`, `set`, `where`, `record`, `global`, ...)
    /// stay identifiers; only `async` and `await` are promoted because the
    /// fixes need to see them.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        let kind = match text {
            "abstract" => SyntaxKind::AbstractKeyword,
            "async" => SyntaxKind::AsyncKeyword,
            "await" => SyntaxKind::AwaitKeyword,
            "base" => SyntaxKind::BaseKeyword,
            "catch" => SyntaxKind::CatchKeyword,
            "checked" => SyntaxKind::CheckedKeyword,
            "class" => SyntaxKind::ClassKeyword,
            "const" => SyntaxKind::ConstKeyword,
            "delegate" => SyntaxKind::DelegateKeyword,
            "do" => SyntaxKind::DoKeyword,
            "else" => SyntaxKind::ElseKeyword,
            "enum" => SyntaxKind::EnumKeyword,
            "event" => SyntaxKind::EventKeyword,
            "explicit" => SyntaxKind::ExplicitKeyword,
            "extern" => SyntaxKind::ExternKeyword,
            "false" => SyntaxKind::FalseKeyword,
            "finally" => SyntaxKind::FinallyKeyword,
            "fixed" => SyntaxKind::FixedKeyword,
            "for" => SyntaxKind::ForKeyword,
            "foreach" => SyntaxKind::ForeachKeyword,
            "if" => SyntaxKind::IfKeyword,
            "implicit" => SyntaxKind::ImplicitKeyword,
            "interface" => SyntaxKind::InterfaceKeyword,
            "internal" => SyntaxKind::InternalKeyword,
            "lock" => SyntaxKind::LockKeyword,
            "namespace" => SyntaxKind::NamespaceKeyword,
            "new" => SyntaxKind::NewKeyword,
            "null" => SyntaxKind::NullKeyword,
            "operator" => SyntaxKind::OperatorKeyword,
            "override" => SyntaxKind::OverrideKeyword,
            "partial" => SyntaxKind::PartialKeyword,
            "private" => SyntaxKind::PrivateKeyword,
            "protected" => SyntaxKind::ProtectedKeyword,
            "public" => SyntaxKind::PublicKeyword,
            "readonly" => SyntaxKind::ReadonlyKeyword,
            "return" => SyntaxKind::ReturnKeyword,
            "sealed" => SyntaxKind::SealedKeyword,
            "static" => SyntaxKind::StaticKeyword,
            "struct" => SyntaxKind::StructKeyword,
            "switch" => SyntaxKind::SwitchKeyword,
            "this" => SyntaxKind::ThisKeyword,
            "throw" => SyntaxKind::ThrowKeyword,
            "true" => SyntaxKind::TrueKeyword,
            "try" => SyntaxKind::TryKeyword,
            "unchecked" => SyntaxKind::UncheckedKeyword,
            "unsafe" => SyntaxKind::UnsafeKeyword,
            "using" => SyntaxKind::UsingKeyword,
            "virtual" => SyntaxKind::VirtualKeyword,
            "void" => SyntaxKind::VoidKeyword,
            "volatile" => SyntaxKind::VolatileKeyword,
            "while" => SyntaxKind::WhileKeyword,
            _ => return None,
        };
        Some(kind)
    }

    /// Fixed source text of punctuation and keyword tokens.
    pub const fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::OpenBraceToken => "{",
            SyntaxKind::CloseBraceToken => "}",
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::OpenBracketToken => "[",
            SyntaxKind::CloseBracketToken => "]",
            SyntaxKind::LessThanToken => "<",
            SyntaxKind::GreaterThanToken => ">",
            SyntaxKind::SemicolonToken => ";",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::DotToken => ".",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::EqualsGreaterThanToken => "=>",
            SyntaxKind::QuestionToken => "?",
            SyntaxKind::ColonToken => ":",
            SyntaxKind::ColonColonToken => "::",
            SyntaxKind::TildeToken => "~",
            SyntaxKind::AsteriskToken => "*",
            SyntaxKind::AbstractKeyword => "abstract",
            SyntaxKind::AsyncKeyword => "async",
            SyntaxKind::AwaitKeyword => "await",
            SyntaxKind::BaseKeyword => "base",
            SyntaxKind::CatchKeyword => "catch",
            SyntaxKind::CheckedKeyword => "checked",
            SyntaxKind::ClassKeyword => "class",
            SyntaxKind::ConstKeyword => "const",
            SyntaxKind::DelegateKeyword => "delegate",
            SyntaxKind::DoKeyword => "do",
            SyntaxKind::ElseKeyword => "else",
            SyntaxKind::EnumKeyword => "enum",
            SyntaxKind::EventKeyword => "event",
            SyntaxKind::ExplicitKeyword => "explicit",
            SyntaxKind::ExternKeyword => "extern",
            SyntaxKind::FalseKeyword => "false",
            SyntaxKind::FinallyKeyword => "finally",
            SyntaxKind::FixedKeyword => "fixed",
            SyntaxKind::ForKeyword => "for",
            SyntaxKind::ForeachKeyword => "foreach",
            SyntaxKind::IfKeyword => "if",
            SyntaxKind::ImplicitKeyword => "implicit",
            SyntaxKind::InterfaceKeyword => "interface",
            SyntaxKind::InternalKeyword => "internal",
            SyntaxKind::LockKeyword => "lock",
            SyntaxKind::NamespaceKeyword => "namespace",
            SyntaxKind::NewKeyword => "new",
            SyntaxKind::NullKeyword => "null",
            SyntaxKind::OperatorKeyword => "operator",
            SyntaxKind::OverrideKeyword => "override",
            SyntaxKind::PartialKeyword => "partial",
            SyntaxKind::PrivateKeyword => "private",
            SyntaxKind::ProtectedKeyword => "protected",
            SyntaxKind::PublicKeyword => "public",
            SyntaxKind::ReadonlyKeyword => "readonly",
            SyntaxKind::ReturnKeyword => "return",
            SyntaxKind::SealedKeyword => "sealed",
            SyntaxKind::StaticKeyword => "static",
            SyntaxKind::StructKeyword => "struct",
            SyntaxKind::SwitchKeyword => "switch",
            SyntaxKind::ThisKeyword => "this",
            SyntaxKind::ThrowKeyword => "throw",
            SyntaxKind::TrueKeyword => "true",
            SyntaxKind::TryKeyword => "try",
            SyntaxKind::UncheckedKeyword => "unchecked",
            SyntaxKind::UnsafeKeyword => "unsafe",
            SyntaxKind::UsingKeyword => "using",
            SyntaxKind::VirtualKeyword => "virtual",
            SyntaxKind::VoidKeyword => "void",
            SyntaxKind::VolatileKeyword => "volatile",
            SyntaxKind::WhileKeyword => "while",
            _ => return None,
        };
        Some(text)
    }
}
