//! Shared constants.

/// Matrix value marking a cell that can no longer be selected for a merge.
/// Used for the diagonal and for every cell of a retired row/column.
pub const SENTINEL: f32 = -1.0;

/// Marker prefixed to retired labels when rendered as text.
pub const DEFAULT_RETIRED_MARKER: char = '*';

/// Environment variable holding the `EnvFilter` directives.
pub const LOG_ENV_VAR: &str = "PHYLO_LOG";

/// Filter used when `PHYLO_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "phylo=info";

/// Environment override for `matrix.parallel`.
pub const ENV_PARALLEL: &str = "PHYLO_PARALLEL";

/// Environment override for `matrix.threads`.
pub const ENV_THREADS: &str = "PHYLO_THREADS";
