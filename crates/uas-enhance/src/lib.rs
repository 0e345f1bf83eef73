//! Render-time component enhancement for uas-lint.
//!
//! Where `uas-lint-core` checks templates statically, this crate decides at
//! build time which library components get wrapped, and computes the props
//! the wrapper hands down:
//!
//! - [`props`]: [`UiRule`] and the prop resolution pipeline
//! - [`library`] / [`presets`]: built-in library table and default rules
//! - [`overrides`] / [`loader`] / [`watch`]: user override files
//! - [`store`]: the versioned [`ResolvedConfig`] cell
//! - [`resolver`]: the cached, async [`EnhanceResolver`]
//!
//! ```
//! use uas_enhance::{resolve_props, Props, UiRule};
//!
//! let rule = UiRule::new().default_prop("clearable", true).auto_placeholder(true);
//! let mut explicit = Props::new();
//! explicit.insert("label".into(), "Name".into());
//!
//! let props = resolve_props(&rule, &Props::new(), &explicit);
//! assert_eq!(props["placeholder"], "请输入Name");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod library;
pub mod loader;
pub mod overrides;
pub mod presets;
pub mod props;
pub mod resolver;
pub mod store;
pub mod watch;

pub use error::{OverrideError, WatchError};
pub use library::{ExportName, LibraryMeta, UiLibrary, UnknownLibrary};
pub use loader::{FileOverrideLoader, OverrideLoader};
pub use overrides::{LibraryOverride, ResolvedConfig};
pub use props::{resolve_props, AutoPlaceholder, Props, UiRule, UiRules};
pub use resolver::{EnhanceResolver, EnhancedComponent, ResolverOptions};
pub use store::{ConfigStore, Snapshot};
pub use watch::{ConfigEvent, OverrideWatcher, Reloader};
