// crates/core/src/language/comment_style.rs
//! コメント構文の種類定義

use serde::{Deserialize, Serialize};

use crate::config::CommentMarkers;

/// コメント構文の種類
///
/// 拡張子からの判定は行わない。呼び出し側が言語に応じて選択する。
///
/// 行コメントのマーカーがブロック開始の接頭辞になる言語（Lua の `--[[`、
/// MATLAB の `%{`）は、先に完成した行コメントが常に勝つためブロックを表現できない。
/// そのためプリセットを用意していない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentStyle {
    /// C系言語: // と /* */
    CStyle,
    /// Shell, Python, YAML 等: #
    Hash,
    /// SQL: -- と /* */
    Sql,
    /// HTML/XML: <!-- -->
    Html,
    /// Haskell: -- と {- -}
    Haskell,
    /// Lisp系: ;
    Lisp,
    /// Erlang / LaTeX / MATLAB: %
    Erlang,
    /// OCaml/F#/Pascal: (* *)
    OCaml,
    /// Fortran: !
    Fortran,
    /// `PowerShell`: # と <# #>
    PowerShell,
    /// コメント構文なし（全ての非空行をカウント）
    None,
}

impl CommentStyle {
    pub const ALL: [Self; 11] = [
        Self::CStyle,
        Self::Hash,
        Self::Sql,
        Self::Html,
        Self::Haskell,
        Self::Lisp,
        Self::Erlang,
        Self::OCaml,
        Self::Fortran,
        Self::PowerShell,
        Self::None,
    ];

    /// スタイルに対応するマーカー
    #[must_use]
    pub const fn markers(self) -> CommentMarkers {
        match self {
            Self::CStyle => CommentMarkers::from_literals(Some("//"), Some(("/*", "*/"))),
            Self::Hash => CommentMarkers::from_literals(Some("#"), None),
            Self::Sql => CommentMarkers::from_literals(Some("--"), Some(("/*", "*/"))),
            Self::Html => CommentMarkers::from_literals(None, Some(("<!--", "-->"))),
            Self::Haskell => CommentMarkers::from_literals(Some("--"), Some(("{-", "-}"))),
            Self::Lisp => CommentMarkers::from_literals(Some(";"), None),
            Self::Erlang => CommentMarkers::from_literals(Some("%"), None),
            Self::OCaml => CommentMarkers::from_literals(None, Some(("(*", "*)"))),
            Self::Fortran => CommentMarkers::from_literals(Some("!"), None),
            Self::PowerShell => CommentMarkers::from_literals(Some("#"), Some(("<#", "#>"))),
            Self::None => CommentMarkers::none(),
        }
    }
}

impl From<CommentStyle> for CommentMarkers {
    fn from(style: CommentStyle) -> Self {
        style.markers()
    }
}
