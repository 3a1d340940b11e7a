//! API Response Envelope
//!
//! Every blog API response is a JSON object of the form
//!
//! ```json
//! { "errorCode": 0, "data": ... }
//! ```
//!
//! optionally carrying `articleId` or `typeId` when a document was written.
//!
//! `errorCode` is route-specific. Each route owns a small enum implementing
//! [`ResultCode`] so handlers never write bare integers. Store failures bypass
//! these enums and report the store's own code (see `BackendError`).

use serde::{Deserialize, Serialize};

/// A route outcome that maps to an `errorCode` value
pub trait ResultCode: Copy {
    fn code(self) -> i64;
}

macro_rules! result_codes {
    ($($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident = $value:expr),+ $(,)? })+) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq)]
            pub enum $name {
                $($(#[$vmeta])* $variant),+
            }

            impl ResultCode for $name {
                fn code(self) -> i64 {
                    match self {
                        $(Self::$variant => $value),+
                    }
                }
            }
        )+
    };
}

result_codes! {
    /// Plain reads: list articles, articles by type, list types, list users
    QueryCode {
        Ok = 0,
    }

    /// `GET /articleDetail/{id}`
    ArticleDetailCode {
        Found = 0,
        NotFound = 1,
    }

    /// `POST /admin/article/new`
    SaveArticleCode {
        Created = 0,
        Updated = 1,
        /// The submitted `_id` matches no stored article
        NotFound = 2,
    }

    /// `POST /admin/deleteArticle`
    DeleteArticleCode {
        Deleted = 0,
    }

    /// `POST /admin/type/new`
    CreateTypeCode {
        Created = 0,
        Duplicate = -1,
    }

    /// `POST /login`
    LoginCode {
        Success = 0,
        UnknownUser = 1,
        WrongPassword = 2,
    }

    /// `POST /signUp`
    SignupCode {
        Registered = 0,
    }
}

/// The `{errorCode, data}` JSON envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub error_code: i64,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
}

impl<T> Envelope<T> {
    /// Create an envelope for a route outcome
    pub fn new(code: impl ResultCode, data: T) -> Self {
        Self::with_raw_code(code.code(), data)
    }

    /// Create an envelope with an `errorCode` that did not come from a route enum
    pub fn with_raw_code(error_code: i64, data: T) -> Self {
        Self {
            error_code,
            data,
            article_id: None,
            type_id: None,
        }
    }

    /// Attach the identifier of the article that was written
    pub fn article_id(mut self, id: impl Into<String>) -> Self {
        self.article_id = Some(id.into());
        self
    }

    /// Attach the identifier of the type that was written
    pub fn type_id(mut self, id: impl Into<String>) -> Self {
        self.type_id = Some(id.into());
        self
    }
}
