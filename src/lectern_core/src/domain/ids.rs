use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(self) -> i64 {
                self.0
            }

            /// Zero is never assigned by the store and is used as "unset".
            pub const fn is_unset(self) -> bool {
                self.0 == 0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

numeric_id!(
    /// Identifier of an account row.
    AccountId
);

numeric_id!(
    /// Identifier of a course row. `CourseId::AVATARS` marks avatar uploads.
    CourseId
);

numeric_id!(
    /// Identifier of a stored file record.
    FileId
);

numeric_id!(
    /// Identifier of a course category. Zero means "any category" in filters.
    CategoryId
);

impl CourseId {
    pub const AVATARS: CourseId = CourseId(0);
}
