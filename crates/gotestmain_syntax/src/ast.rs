//! Declaration tree definitions for Go source files
//!
//! The parser only materializes what test discovery needs: the package clause, imports, the names
//! introduced by `const`/`var`/`type`, and full function signatures. Function bodies and
//! initializer expressions are skipped.

use std::fmt;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// One parsed `.go` file: the package clause and its top-level declarations in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub package: Spanned<Ident>,
    pub declarations: Vec<Spanned<Declaration>>,
}

impl SourceFile {
    /// Iterate over the function declarations of this file, in source order.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.declarations.iter().filter_map(|d| match &d.node {
            Declaration::Function(f) => Some(f),
            _ => None,
        })
    }

    /// Iterate over the import declarations of this file, in source order.
    pub fn imports(&self) -> impl Iterator<Item = &ImportDecl> {
        self.declarations.iter().filter_map(|d| match &d.node {
            Declaration::Import(i) => Some(i),
            _ => None,
        })
    }
}

/// Top-level declarations
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Import(ImportDecl),
    Const(GenDecl),
    Var(GenDecl),
    Type(GenDecl),
    Function(FunctionDecl),
}

// ============================================================================
// Imports
// ============================================================================

/// A single import spec. Grouped `import ( ... )` blocks produce one declaration per spec.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    pub path: String,
    pub alias: Option<ImportAlias>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportAlias {
    /// `import name "path"`
    Named(Ident),
    /// `import . "path"`
    Dot,
    /// `import _ "path"`
    Blank,
}

impl ImportDecl {
    /// The identifier this import is referenced by in the file, if any.
    ///
    /// Without an explicit alias this is the last path element, which matches the package name
    /// for conventional layouts.
    pub fn local_name(&self) -> Option<&str> {
        match &self.alias {
            Some(ImportAlias::Named(name)) => Some(name),
            Some(ImportAlias::Dot | ImportAlias::Blank) => None,
            None => self.path.rsplit('/').next(),
        }
    }
}

// ============================================================================
// const / var / type
// ============================================================================

/// A `const`, `var` or `type` declaration, single or grouped.
///
/// Only the declared names are kept; types and initializers are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct GenDecl {
    pub grouped: bool,
    pub names: Vec<Spanned<Ident>>,
}

// ============================================================================
// Functions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    pub name: Ident,
    /// Method receiver: `func (s *S) Name()`.
    pub receiver: Option<Spanned<Param>>,
    /// `func Name[T any]()`.
    pub has_type_params: bool,
    /// One entry per declared parameter; `a, b int` yields two entries.
    pub params: Vec<Spanned<Param>>,
    /// One entry per result; empty for functions without results.
    pub results: Vec<Spanned<Param>>,
    /// `false` for body-less declarations (implemented in assembly or via linkname).
    pub has_body: bool,
}

impl FunctionDecl {
    pub fn is_method(&self) -> bool {
        self.receiver.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Option<Ident>,
    pub ty: Spanned<TypeExpr>,
}

// ============================================================================
// Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

/// Syntactic type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// `int`, `MyType`
    Named(Ident),
    /// `qualifier.Name` (selector-style type reference)
    Qualified { qualifier: Ident, name: Ident },
    /// `*T`
    Pointer(Box<Spanned<TypeExpr>>),
    /// `[]T`
    Slice(Box<Spanned<TypeExpr>>),
    /// `[N]T` or `[...]T`; the length expression is not kept
    Array(Box<Spanned<TypeExpr>>),
    /// `map[K]V`
    Map(Box<Spanned<TypeExpr>>, Box<Spanned<TypeExpr>>),
    /// `chan T`, `chan<- T`, `<-chan T`
    Chan(ChanDir, Box<Spanned<TypeExpr>>),
    /// `func(params) results`
    Func {
        params: Vec<Spanned<Param>>,
        results: Vec<Spanned<Param>>,
    },
    /// `struct { ... }`; fields are not kept
    Struct,
    /// `interface { ... }`; methods are not kept
    Interface,
    /// `Base[Args]`
    Generic {
        base: Box<Spanned<TypeExpr>>,
        args: Vec<Spanned<TypeExpr>>,
    },
    /// `...T` (final parameter only)
    Variadic(Box<Spanned<TypeExpr>>),
    /// `(T)`
    Paren(Box<Spanned<TypeExpr>>),
}

impl TypeExpr {
    /// If this is a pointer to a selector-style type reference (`*qualifier.Name`), return the
    /// qualifier and the referenced name.
    ///
    /// Parenthesized (`*(q.T)`) and instantiated (`*q.T[X]`) forms do not match.
    pub fn pointee_selector(&self) -> Option<(&str, &str)> {
        let TypeExpr::Pointer(inner) = self else {
            return None;
        };
        match &inner.node {
            TypeExpr::Qualified { qualifier, name } => Some((qualifier, name)),
            _ => None,
        }
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named(name) => write!(f, "{}", name),
            TypeExpr::Qualified { qualifier, name } => write!(f, "{}.{}", qualifier, name),
            TypeExpr::Pointer(inner) => write!(f, "*{}", inner.node),
            TypeExpr::Slice(inner) => write!(f, "[]{}", inner.node),
            TypeExpr::Array(inner) => write!(f, "[_]{}", inner.node),
            TypeExpr::Map(k, v) => write!(f, "map[{}]{}", k.node, v.node),
            TypeExpr::Chan(dir, inner) => match dir {
                ChanDir::Both => write!(f, "chan {}", inner.node),
                ChanDir::Send => write!(f, "chan<- {}", inner.node),
                ChanDir::Recv => write!(f, "<-chan {}", inner.node),
            },
            TypeExpr::Func { params, results } => {
                write!(f, "func(")?;
                write_params(f, params)?;
                write!(f, ")")?;
                match results.as_slice() {
                    [] => Ok(()),
                    [single] if single.node.name.is_none() => write!(f, " {}", single.node.ty.node),
                    _ => {
                        write!(f, " (")?;
                        write_params(f, results)?;
                        write!(f, ")")
                    }
                }
            }
            TypeExpr::Struct => write!(f, "struct{{...}}"),
            TypeExpr::Interface => write!(f, "interface{{...}}"),
            TypeExpr::Generic { base, args } => {
                write!(f, "{}[", base.node)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg.node)?;
                }
                write!(f, "]")
            }
            TypeExpr::Variadic(inner) => write!(f, "...{}", inner.node),
            TypeExpr::Paren(inner) => write!(f, "({})", inner.node),
        }
    }
}

fn write_params(f: &mut fmt::Formatter<'_>, params: &[Spanned<Param>]) -> fmt::Result {
    for (i, p) in params.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        if let Some(name) = &p.node.name {
            write!(f, "{} ", name)?;
        }
        write!(f, "{}", p.node.ty.node)?;
    }
    Ok(())
}

impl fmt::Display for FunctionDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "func ")?;
        if let Some(recv) = &self.receiver {
            write!(f, "(")?;
            write_params(f, std::slice::from_ref(recv))?;
            write!(f, ") ")?;
        }
        write!(f, "{}", self.name)?;
        if self.has_type_params {
            write!(f, "[...]")?;
        }
        let sig = TypeExpr::Func {
            params: self.params.clone(),
            results: self.results.clone(),
        };
        // Reuse the func-type rendering without its leading keyword.
        let rendered = sig.to_string();
        write!(f, "{}", rendered.trim_start_matches("func"))
    }
}
