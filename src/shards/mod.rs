//! Shard selectors for the NationStates API endpoints.
//!
//! A shard is an optional field, or group of fields, that the caller asks the
//! API to include in a response. Each endpoint has its own catalog of shards,
//! modelled as an enum whose declaration order is the order in which shards are
//! written into the query string.
//!
//! # Modules
//!
//! - `nation` - [`NationShards`] and census statistic selection
//! - `region` - [`RegionShards`] and the message board offset
//! - `world` - [`WorldShards`], happenings and regions-by-tag configuration
//! - `world_assembly` - [`WorldAssemblyShards`] and the [`Council`] selector
//!
//! # Examples
//!
//! ```
//! use nsapi::shards::{NationShard, NationShards};
//!
//! let shards = NationShards::new()
//!     .with(NationShard::Name)
//!     .with(NationShard::Population);
//!
//! assert!(shards.is_enabled(NationShard::Population));
//! assert_eq!("population".parse::<NationShard>().unwrap(), NationShard::Population);
//! ```

/// Declares a shard catalog: the enum, its wire tokens and token parsing.
macro_rules! shard_catalog {
    (
        $(#[$meta:meta])*
        $name:ident ($label:literal) {
            $( $(#[$variant_meta:meta])* $variant:ident => $token:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant, )+
        }

        impl $name {
            /// Every entry of the catalog, in emission order.
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];

            /// Token used for this entry in the query string.
            pub fn token(self) -> &'static str {
                match self {
                    $( $name::$variant => $token, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.token())
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::Error;

            fn from_str(token: &str) -> crate::error::Result<Self> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|entry| entry.token() == token)
                    .ok_or_else(|| {
                        crate::error::Error::invalid_argument(format!(
                            "unknown {} '{}'",
                            $label, token
                        ))
                    })
            }
        }
    };
}

/// Implements the enable/disable methods shared by every selector.
macro_rules! shard_toggles {
    ($selector:ident, $shard:ident) => {
        impl $selector {
            /// Enable `shard`, builder style.
            pub fn with(mut self, shard: $shard) -> Self {
                self.shards.insert(shard);
                self
            }

            /// Disable `shard`, builder style.
            pub fn without(mut self, shard: $shard) -> Self {
                self.shards.remove(&shard);
                self
            }

            /// Enable `shard`.
            pub fn enable(&mut self, shard: $shard) {
                self.shards.insert(shard);
            }

            /// Disable `shard`.
            pub fn disable(&mut self, shard: $shard) {
                self.shards.remove(&shard);
            }

            /// Whether `shard` is enabled.
            pub fn is_enabled(&self, shard: $shard) -> bool {
                self.shards.contains(&shard)
            }

            /// Enabled shards, in emission order.
            pub fn enabled(&self) -> impl Iterator<Item = $shard> + '_ {
                self.shards.iter().copied()
            }

            /// Whether no shard at all is enabled.
            pub fn is_empty(&self) -> bool {
                self.shards.is_empty()
            }
        }

        impl Extend<$shard> for $selector {
            fn extend<I: IntoIterator<Item = $shard>>(&mut self, iter: I) {
                self.shards.extend(iter);
            }
        }

        impl FromIterator<$shard> for $selector {
            fn from_iter<I: IntoIterator<Item = $shard>>(iter: I) -> Self {
                let mut selector = $selector::new();
                selector.extend(iter);
                selector
            }
        }
    };
}

mod nation;
mod region;
mod world;
mod world_assembly;

pub use crate::shards::nation::{NationShard, NationShards};
pub use crate::shards::region::{RegionShard, RegionShards};
pub use crate::shards::world::{
    HappeningFilter, HappeningsConfig, HappeningsView, RegionsByTagConfig, WorldShard,
    WorldShards,
};
pub use crate::shards::world_assembly::{Council, WorldAssemblyShard, WorldAssemblyShards};
