//! Typed domain separators for [`super::hash::canonical_hash`].
//!
//! Every digest in the workspace names its domain here. Two artifacts with
//! byte-identical canonical JSON but different meaning (a scenario and a
//! report, say) never share a digest.

/// Generates `HashDomain`, `as_bytes()`, `ALL` and `Display` from one list.
macro_rules! hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Domain separator prepended to the hashed bytes.
        ///
        /// Each variant maps to a unique, null-terminated prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw prefix bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domains in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => write!(f, stringify!($variant)), )+
                }
            }
        }
    };
}

hash_domains! {
    /// A scenario's nodes, edges, start and goal.
    Scenario => b"PATHLAB::SCENARIO::V1\0",

    /// The per-expansion transcript of one engine run.
    SearchTranscript => b"PATHLAB::SEARCH_TRANSCRIPT::V1\0",

    /// Driver step-cap policy.
    RunPolicy => b"PATHLAB::RUN_POLICY::V1\0",

    /// A finished driver run (outcome, path, counters).
    RunReport => b"PATHLAB::RUN_REPORT::V1\0",
}
