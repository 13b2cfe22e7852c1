//! C# syntax kinds.
//!
//! Kinds are laid out in contiguous ranges so the category checks below are
//! plain integer comparisons:
//!
//! 1. punctuation tokens
//! 2. reserved keywords
//! 3. contextual keywords
//! 4. preprocessor keywords
//! 5. remaining tokens (identifiers, literals, end markers)
//! 6. nodes (everything from `CompilationUnit` on)

use serde::Serialize;

#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum SyntaxKind {
    None = 0,

    // =========================================================================
    // Punctuation
    // =========================================================================
    TildeToken,
    ExclamationToken,
    PercentToken,
    CaretToken,
    AmpersandToken,
    AsteriskToken,
    OpenParenToken,
    CloseParenToken,
    MinusToken,
    PlusToken,
    EqualsToken,
    OpenBraceToken,
    CloseBraceToken,
    OpenBracketToken,
    CloseBracketToken,
    BarToken,
    ColonToken,
    SemicolonToken,
    LessThanToken,
    CommaToken,
    GreaterThanToken,
    DotToken,
    QuestionToken,
    HashToken,
    SlashToken,
    BarBarToken,
    AmpersandAmpersandToken,
    MinusMinusToken,
    PlusPlusToken,
    ColonColonToken,
    QuestionQuestionToken,
    MinusGreaterThanToken,
    ExclamationEqualsToken,
    EqualsEqualsToken,
    EqualsGreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    LessThanLessThanToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    SlashEqualsToken,

    // =========================================================================
    // Reserved keywords
    // =========================================================================
    BoolKeyword,
    ByteKeyword,
    SByteKeyword,
    ShortKeyword,
    UShortKeyword,
    IntKeyword,
    UIntKeyword,
    LongKeyword,
    ULongKeyword,
    DoubleKeyword,
    FloatKeyword,
    DecimalKeyword,
    StringKeyword,
    CharKeyword,
    VoidKeyword,
    ObjectKeyword,
    TypeOfKeyword,
    SizeOfKeyword,
    NullKeyword,
    TrueKeyword,
    FalseKeyword,
    IfKeyword,
    ElseKeyword,
    WhileKeyword,
    ForKeyword,
    ForEachKeyword,
    DoKeyword,
    SwitchKeyword,
    CaseKeyword,
    DefaultKeyword,
    TryKeyword,
    CatchKeyword,
    FinallyKeyword,
    LockKeyword,
    GotoKeyword,
    BreakKeyword,
    ContinueKeyword,
    ReturnKeyword,
    ThrowKeyword,
    PublicKeyword,
    PrivateKeyword,
    InternalKeyword,
    ProtectedKeyword,
    StaticKeyword,
    ReadOnlyKeyword,
    SealedKeyword,
    ConstKeyword,
    FixedKeyword,
    StackAllocKeyword,
    VolatileKeyword,
    NewKeyword,
    OverrideKeyword,
    AbstractKeyword,
    VirtualKeyword,
    EventKeyword,
    ExternKeyword,
    RefKeyword,
    OutKeyword,
    InKeyword,
    IsKeyword,
    AsKeyword,
    ParamsKeyword,
    ArgListKeyword,
    ThisKeyword,
    BaseKeyword,
    NamespaceKeyword,
    UsingKeyword,
    ClassKeyword,
    StructKeyword,
    InterfaceKeyword,
    EnumKeyword,
    DelegateKeyword,
    CheckedKeyword,
    UncheckedKeyword,
    UnsafeKeyword,
    OperatorKeyword,
    ExplicitKeyword,
    ImplicitKeyword,

    // =========================================================================
    // Contextual keywords
    // =========================================================================
    YieldKeyword,
    PartialKeyword,
    AliasKeyword,
    GlobalKeyword,
    AssemblyKeyword,
    ModuleKeyword,
    TypeKeyword,
    FieldKeyword,
    MethodKeyword,
    ParamKeyword,
    PropertyKeyword,
    TypeVarKeyword,
    GetKeyword,
    SetKeyword,
    AddKeyword,
    RemoveKeyword,
    WhereKeyword,
    FromKeyword,
    GroupKeyword,
    JoinKeyword,
    IntoKeyword,
    LetKeyword,
    ByKeyword,
    SelectKeyword,
    OrderByKeyword,
    OnKeyword,
    EqualsKeyword,
    AscendingKeyword,
    DescendingKeyword,
    AsyncKeyword,
    AwaitKeyword,

    // =========================================================================
    // Preprocessor keywords (`if`, `else`, `true`, `false` and `default` are
    // shared with the reserved set above)
    // =========================================================================
    ElifKeyword,
    EndIfKeyword,
    RegionKeyword,
    EndRegionKeyword,
    DefineKeyword,
    UndefKeyword,
    WarningKeyword,
    ErrorKeyword,
    LineKeyword,
    PragmaKeyword,
    HiddenKeyword,
    ChecksumKeyword,
    DisableKeyword,
    RestoreKeyword,

    // =========================================================================
    // Other tokens
    // =========================================================================
    IdentifierToken,
    NumericLiteralToken,
    CharacterLiteralToken,
    StringLiteralToken,
    EndOfDirectiveToken,
    EndOfDocumentationCommentToken,
    EndOfFileToken,

    // =========================================================================
    // Nodes: compilation unit and top-level declarations
    // =========================================================================
    CompilationUnit,
    GlobalStatement,
    IncompleteMember,
    NamespaceDeclaration,
    UsingDirective,
    ExternAliasDirective,
    NameEquals,
    AttributeList,
    AttributeTargetSpecifier,
    Attribute,
    AttributeArgumentList,
    AttributeArgument,
    TypeParameterList,
    TypeParameter,
    TypeParameterConstraintClause,
    BaseList,
    SimpleBaseType,
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    EnumDeclaration,
    DelegateDeclaration,
    EnumMemberDeclaration,
    FieldDeclaration,
    EventFieldDeclaration,
    MethodDeclaration,
    OperatorDeclaration,
    ConversionOperatorDeclaration,
    ConstructorDeclaration,
    BaseConstructorInitializer,
    ThisConstructorInitializer,
    DestructorDeclaration,
    PropertyDeclaration,
    EventDeclaration,
    IndexerDeclaration,
    AccessorList,
    GetAccessorDeclaration,
    SetAccessorDeclaration,
    AddAccessorDeclaration,
    RemoveAccessorDeclaration,
    UnknownAccessorDeclaration,
    ParameterList,
    BracketedParameterList,
    Parameter,
    ArrowExpressionClause,
    EqualsValueClause,

    // =========================================================================
    // Nodes: types and names
    // =========================================================================
    IdentifierName,
    QualifiedName,
    GenericName,
    TypeArgumentList,
    AliasQualifiedName,
    PredefinedType,
    ArrayType,
    ArrayRankSpecifier,
    PointerType,
    NullableType,
    OmittedTypeArgument,

    // =========================================================================
    // Nodes: expressions
    // =========================================================================
    ParenthesizedExpression,
    ConditionalExpression,
    InvocationExpression,
    ElementAccessExpression,
    ArgumentList,
    BracketedArgumentList,
    Argument,
    NameColon,
    CastExpression,
    AnonymousMethodExpression,
    SimpleLambdaExpression,
    ParenthesizedLambdaExpression,
    ObjectInitializerExpression,
    CollectionInitializerExpression,
    ArrayInitializerExpression,
    ObjectCreationExpression,
    AnonymousObjectCreationExpression,
    ArrayCreationExpression,
    StackAllocArrayCreationExpression,
    SimpleMemberAccessExpression,
    PointerMemberAccessExpression,
    AwaitExpression,
    ThisExpression,
    BaseExpression,
    ArgListExpression,
    NumericLiteralExpression,
    StringLiteralExpression,
    CharacterLiteralExpression,
    TrueLiteralExpression,
    FalseLiteralExpression,
    NullLiteralExpression,
    TypeOfExpression,
    SizeOfExpression,
    CheckedExpression,
    UncheckedExpression,
    DefaultExpression,

    // Binary expressions
    AddExpression,
    SubtractExpression,
    MultiplyExpression,
    DivideExpression,
    ModuloExpression,
    LeftShiftExpression,
    RightShiftExpression,
    LogicalOrExpression,
    LogicalAndExpression,
    BitwiseOrExpression,
    BitwiseAndExpression,
    ExclusiveOrExpression,
    EqualsExpression,
    NotEqualsExpression,
    LessThanExpression,
    LessThanOrEqualExpression,
    GreaterThanExpression,
    GreaterThanOrEqualExpression,
    IsExpression,
    AsExpression,
    CoalesceExpression,

    // Assignment expressions
    SimpleAssignmentExpression,
    AddAssignmentExpression,
    SubtractAssignmentExpression,
    MultiplyAssignmentExpression,
    DivideAssignmentExpression,

    // Prefix unary expressions
    UnaryPlusExpression,
    UnaryMinusExpression,
    BitwiseNotExpression,
    LogicalNotExpression,
    PreIncrementExpression,
    PreDecrementExpression,
    AddressOfExpression,
    PointerIndirectionExpression,

    // Postfix unary expressions
    PostIncrementExpression,
    PostDecrementExpression,

    // =========================================================================
    // Nodes: query expressions
    // =========================================================================
    QueryExpression,
    QueryBody,
    FromClause,
    LetClause,
    JoinClause,
    JoinIntoClause,
    WhereClause,
    OrderByClause,
    AscendingOrdering,
    DescendingOrdering,
    SelectClause,
    GroupClause,
    QueryContinuation,

    // =========================================================================
    // Nodes: statements and clauses
    // =========================================================================
    Block,
    LocalDeclarationStatement,
    VariableDeclaration,
    VariableDeclarator,
    ExpressionStatement,
    EmptyStatement,
    LabeledStatement,
    GotoStatement,
    GotoCaseStatement,
    GotoDefaultStatement,
    BreakStatement,
    ContinueStatement,
    ReturnStatement,
    YieldReturnStatement,
    YieldBreakStatement,
    ThrowStatement,
    WhileStatement,
    DoStatement,
    ForStatement,
    ForEachStatement,
    UsingStatement,
    FixedStatement,
    CheckedStatement,
    UncheckedStatement,
    UnsafeStatement,
    LockStatement,
    IfStatement,
    ElseClause,
    SwitchStatement,
    SwitchSection,
    CaseSwitchLabel,
    DefaultSwitchLabel,
    TryStatement,
    CatchClause,
    CatchDeclaration,
    CatchFilterClause,
    FinallyClause,

    // =========================================================================
    // Nodes: documentation comment cref structure
    // =========================================================================
    XmlCrefAttribute,
    TypeCref,
    QualifiedCref,
    NameMemberCref,
    IndexerMemberCref,
    OperatorMemberCref,
    CrefParameterList,
    CrefBracketedParameterList,
    CrefParameter,

    // =========================================================================
    // Nodes: structured trivia
    // =========================================================================
    SkippedTokensTrivia,
    SingleLineDocumentationCommentTrivia,
    MultiLineDocumentationCommentTrivia,
    IfDirectiveTrivia,
    ElifDirectiveTrivia,
    ElseDirectiveTrivia,
    EndIfDirectiveTrivia,
    RegionDirectiveTrivia,
    EndRegionDirectiveTrivia,
    DefineDirectiveTrivia,
    UndefDirectiveTrivia,
    ErrorDirectiveTrivia,
    WarningDirectiveTrivia,
    LineDirectiveTrivia,
    PragmaWarningDirectiveTrivia,
    BadDirectiveTrivia,
}

use SyntaxKind::*;

impl SyntaxKind {
    /// Tokens are leaves; everything from `CompilationUnit` on is a node.
    #[inline]
    pub fn is_token(self) -> bool {
        self != None && (self as u16) < (CompilationUnit as u16)
    }

    #[inline]
    pub fn is_node(self) -> bool {
        (self as u16) >= (CompilationUnit as u16)
    }

    #[inline]
    pub fn is_punctuation(self) -> bool {
        (TildeToken as u16..=SlashEqualsToken as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_reserved_keyword(self) -> bool {
        (BoolKeyword as u16..=ImplicitKeyword as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_contextual_keyword(self) -> bool {
        (YieldKeyword as u16..=AwaitKeyword as u16).contains(&(self as u16))
    }

    #[inline]
    pub fn is_preprocessor_keyword(self) -> bool {
        (ElifKeyword as u16..=RestoreKeyword as u16).contains(&(self as u16))
            || matches!(
                self,
                IfKeyword | ElseKeyword | TrueKeyword | FalseKeyword | DefaultKeyword
            )
    }

    #[inline]
    pub fn is_keyword(self) -> bool {
        (BoolKeyword as u16..=RestoreKeyword as u16).contains(&(self as u16))
    }

    /// Identifiers and keywords: tokens a caret can be "touching" while the
    /// user is still typing a word.
    #[inline]
    pub fn is_word(self) -> bool {
        self == IdentifierToken || self.is_keyword()
    }

    pub fn is_statement(self) -> bool {
        matches!(
            self,
            Block
                | LocalDeclarationStatement
                | ExpressionStatement
                | EmptyStatement
                | LabeledStatement
                | GotoStatement
                | GotoCaseStatement
                | GotoDefaultStatement
                | BreakStatement
                | ContinueStatement
                | ReturnStatement
                | YieldReturnStatement
                | YieldBreakStatement
                | ThrowStatement
                | WhileStatement
                | DoStatement
                | ForStatement
                | ForEachStatement
                | UsingStatement
                | FixedStatement
                | CheckedStatement
                | UncheckedStatement
                | UnsafeStatement
                | LockStatement
                | IfStatement
                | SwitchStatement
                | TryStatement
        )
    }

    pub fn is_member_declaration(self) -> bool {
        matches!(
            self,
            GlobalStatement
                | IncompleteMember
                | NamespaceDeclaration
                | ClassDeclaration
                | StructDeclaration
                | InterfaceDeclaration
                | EnumDeclaration
                | DelegateDeclaration
                | EnumMemberDeclaration
                | FieldDeclaration
                | EventFieldDeclaration
                | MethodDeclaration
                | OperatorDeclaration
                | ConversionOperatorDeclaration
                | ConstructorDeclaration
                | DestructorDeclaration
                | PropertyDeclaration
                | EventDeclaration
                | IndexerDeclaration
        )
    }

    /// Type syntax. Note that a bare `IdentifierName` is a type too, which is
    /// what makes `(a)` look like a cast to purely syntactic checks.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            IdentifierName
                | QualifiedName
                | GenericName
                | AliasQualifiedName
                | PredefinedType
                | ArrayType
                | PointerType
                | NullableType
                | OmittedTypeArgument
        )
    }

    /// Clauses that may appear between `from` and the final `select`/`group`.
    pub fn is_query_clause(self) -> bool {
        matches!(
            self,
            FromClause | LetClause | JoinClause | WhereClause | OrderByClause
        )
    }

    pub fn is_ordering(self) -> bool {
        matches!(self, AscendingOrdering | DescendingOrdering)
    }

    pub fn is_binary_expression(self) -> bool {
        (AddExpression as u16..=CoalesceExpression as u16).contains(&(self as u16))
    }

    pub fn is_assignment_expression(self) -> bool {
        (SimpleAssignmentExpression as u16..=DivideAssignmentExpression as u16)
            .contains(&(self as u16))
    }

    pub fn is_prefix_unary_expression(self) -> bool {
        (UnaryPlusExpression as u16..=PointerIndirectionExpression as u16).contains(&(self as u16))
    }

    pub fn is_postfix_unary_expression(self) -> bool {
        matches!(self, PostIncrementExpression | PostDecrementExpression)
    }

    pub fn is_accessor_declaration(self) -> bool {
        matches!(
            self,
            GetAccessorDeclaration
                | SetAccessorDeclaration
                | AddAccessorDeclaration
                | RemoveAccessorDeclaration
                | UnknownAccessorDeclaration
        )
    }

    pub fn is_argument_list(self) -> bool {
        matches!(self, ArgumentList | BracketedArgumentList)
    }

    pub fn is_modifier_keyword(self) -> bool {
        matches!(
            self,
            PublicKeyword
                | PrivateKeyword
                | InternalKeyword
                | ProtectedKeyword
                | StaticKeyword
                | ReadOnlyKeyword
                | SealedKeyword
                | ConstKeyword
                | FixedKeyword
                | VolatileKeyword
                | NewKeyword
                | OverrideKeyword
                | AbstractKeyword
                | VirtualKeyword
                | ExternKeyword
                | UnsafeKeyword
                | PartialKeyword
                | AsyncKeyword
        )
    }

    pub fn is_access_modifier(self) -> bool {
        matches!(
            self,
            PublicKeyword | PrivateKeyword | InternalKeyword | ProtectedKeyword
        )
    }

    /// Nodes that the parser hangs off tokens as trivia rather than placing in
    /// the grammar proper.
    pub fn is_structured_trivia(self) -> bool {
        (SkippedTokensTrivia as u16..=BadDirectiveTrivia as u16).contains(&(self as u16))
    }

    pub fn is_documentation_comment(self) -> bool {
        matches!(
            self,
            SingleLineDocumentationCommentTrivia | MultiLineDocumentationCommentTrivia
        )
    }

    pub fn is_directive(self) -> bool {
        (IfDirectiveTrivia as u16..=BadDirectiveTrivia as u16).contains(&(self as u16))
    }

    /// `#if` and `#elif`: the directives that carry a condition.
    pub fn is_conditional_directive(self) -> bool {
        matches!(self, IfDirectiveTrivia | ElifDirectiveTrivia)
    }

    /// Fixed source text of punctuation and keywords.
    pub fn text(self) -> Option<&'static str> {
        let text = match self {
            TildeToken => "~",
            ExclamationToken => "!",
            PercentToken => "%",
            CaretToken => "^",
            AmpersandToken => "&",
            AsteriskToken => "*",
            OpenParenToken => "(",
            CloseParenToken => ")",
            MinusToken => "-",
            PlusToken => "+",
            EqualsToken => "=",
            OpenBraceToken => "{",
            CloseBraceToken => "}",
            OpenBracketToken => "[",
            CloseBracketToken => "]",
            BarToken => "|",
            ColonToken => ":",
            SemicolonToken => ";",
            LessThanToken => "<",
            CommaToken => ",",
            GreaterThanToken => ">",
            DotToken => ".",
            QuestionToken => "?",
            HashToken => "#",
            SlashToken => "/",
            BarBarToken => "||",
            AmpersandAmpersandToken => "&&",
            MinusMinusToken => "--",
            PlusPlusToken => "++",
            ColonColonToken => "::",
            QuestionQuestionToken => "??",
            MinusGreaterThanToken => "->",
            ExclamationEqualsToken => "!=",
            EqualsEqualsToken => "==",
            EqualsGreaterThanToken => "=>",
            LessThanEqualsToken => "<=",
            GreaterThanEqualsToken => ">=",
            LessThanLessThanToken => "<<",
            PlusEqualsToken => "+=",
            MinusEqualsToken => "-=",
            AsteriskEqualsToken => "*=",
            SlashEqualsToken => "/=",

            BoolKeyword => "bool",
            ByteKeyword => "byte",
            SByteKeyword => "sbyte",
            ShortKeyword => "short",
            UShortKeyword => "ushort",
            IntKeyword => "int",
            UIntKeyword => "uint",
            LongKeyword => "long",
            ULongKeyword => "ulong",
            DoubleKeyword => "double",
            FloatKeyword => "float",
            DecimalKeyword => "decimal",
            StringKeyword => "string",
            CharKeyword => "char",
            VoidKeyword => "void",
            ObjectKeyword => "object",
            TypeOfKeyword => "typeof",
            SizeOfKeyword => "sizeof",
            NullKeyword => "null",
            TrueKeyword => "true",
            FalseKeyword => "false",
            IfKeyword => "if",
            ElseKeyword => "else",
            WhileKeyword => "while",
            ForKeyword => "for",
            ForEachKeyword => "foreach",
            DoKeyword => "do",
            SwitchKeyword => "switch",
            CaseKeyword => "case",
            DefaultKeyword => "default",
            TryKeyword => "try",
            CatchKeyword => "catch",
            FinallyKeyword => "finally",
            LockKeyword => "lock",
            GotoKeyword => "goto",
            BreakKeyword => "break",
            ContinueKeyword => "continue",
            ReturnKeyword => "return",
            ThrowKeyword => "throw",
            PublicKeyword => "public",
            PrivateKeyword => "private",
            InternalKeyword => "internal",
            ProtectedKeyword => "protected",
            StaticKeyword => "static",
            ReadOnlyKeyword => "readonly",
            SealedKeyword => "sealed",
            ConstKeyword => "const",
            FixedKeyword => "fixed",
            StackAllocKeyword => "stackalloc",
            VolatileKeyword => "volatile",
            NewKeyword => "new",
            OverrideKeyword => "override",
            AbstractKeyword => "abstract",
            VirtualKeyword => "virtual",
            EventKeyword => "event",
            ExternKeyword => "extern",
            RefKeyword => "ref",
            OutKeyword => "out",
            InKeyword => "in",
            IsKeyword => "is",
            AsKeyword => "as",
            ParamsKeyword => "params",
            ArgListKeyword => "__arglist",
            ThisKeyword => "this",
            BaseKeyword => "base",
            NamespaceKeyword => "namespace",
            UsingKeyword => "using",
            ClassKeyword => "class",
            StructKeyword => "struct",
            InterfaceKeyword => "interface",
            EnumKeyword => "enum",
            DelegateKeyword => "delegate",
            CheckedKeyword => "checked",
            UncheckedKeyword => "unchecked",
            UnsafeKeyword => "unsafe",
            OperatorKeyword => "operator",
            ExplicitKeyword => "explicit",
            ImplicitKeyword => "implicit",

            YieldKeyword => "yield",
            PartialKeyword => "partial",
            AliasKeyword => "alias",
            GlobalKeyword => "global",
            AssemblyKeyword => "assembly",
            ModuleKeyword => "module",
            TypeKeyword => "type",
            FieldKeyword => "field",
            MethodKeyword => "method",
            ParamKeyword => "param",
            PropertyKeyword => "property",
            TypeVarKeyword => "typevar",
            GetKeyword => "get",
            SetKeyword => "set",
            AddKeyword => "add",
            RemoveKeyword => "remove",
            WhereKeyword => "where",
            FromKeyword => "from",
            GroupKeyword => "group",
            JoinKeyword => "join",
            IntoKeyword => "into",
            LetKeyword => "let",
            ByKeyword => "by",
            SelectKeyword => "select",
            OrderByKeyword => "orderby",
            OnKeyword => "on",
            EqualsKeyword => "equals",
            AscendingKeyword => "ascending",
            DescendingKeyword => "descending",
            AsyncKeyword => "async",
            AwaitKeyword => "await",

            ElifKeyword => "elif",
            EndIfKeyword => "endif",
            RegionKeyword => "region",
            EndRegionKeyword => "endregion",
            DefineKeyword => "define",
            UndefKeyword => "undef",
            WarningKeyword => "warning",
            ErrorKeyword => "error",
            LineKeyword => "line",
            PragmaKeyword => "pragma",
            HiddenKeyword => "hidden",
            ChecksumKeyword => "checksum",
            DisableKeyword => "disable",
            RestoreKeyword => "restore",

            _ => return Option::None,
        };
        Some(text)
    }
}

#[cfg(test)]
#[path = "tests/kind_tests.rs"]
mod tests;
