//! Typed domain separators for canonical hashing.
//!
//! Every digest computed in the workspace selects a domain via
//! [`HashDomain`]. Adding a domain is one line in the macro invocation;
//! the enum, `as_bytes()`, `ALL` and `Display` are generated together.

macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated prefix that is fed
        /// to SHA-256 ahead of the payload.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw domain-separator bytes (null-terminated).
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domain variants in declaration order.
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

define_hash_domains! {
    // Search

    /// `SearchReportV1` canonical bytes.
    SearchReport => b"PURSUIT::SEARCH_REPORT::V1\0",

    /// Found path (ordered hunter cells).
    SearchPath => b"PURSUIT::SEARCH_PATH::V1\0",

    // Harness

    /// Scenario document canonical bytes.
    Scenario => b"PURSUIT::SCENARIO::V1\0",

    /// Run report binding scenario, policy and search report digests.
    RunReport => b"PURSUIT::RUN_REPORT::V1\0",

    /// Playback script canonical bytes.
    PlaybackScript => b"PURSUIT::PLAYBACK_SCRIPT::V1\0",

    // Benchmarks

    /// Benchmark input hashing.
    BenchInput => b"PURSUIT::BENCH_INPUT::V1\0",
}
