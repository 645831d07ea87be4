//! # WarpKit
//!
//! An interactive 2D rectangle editor core: rectangles are drawn on a
//! canvas and manipulated under five transform modes (translation,
//! rotation, scaling, affine, perspective) through draggable handles.
//! Documents persist each shape's base rectangle plus its full 3x3
//! transform as JSON.
//!
//! ## Architecture
//!
//! WarpKit is organized as a workspace with multiple crates:
//!
//! 1. **warpkit-core** - Geometry, homogeneous transforms, quad-to-quad solve, errors
//! 2. **warpkit-settings** - Editor configuration (handle geometry, initial mode)
//! 3. **warpkit-designer** - Shapes, handles, the editor controller, documents
//! 4. **warpkit** - This façade crate, plus logging setup
//!
//! The host application owns the window, the rendering surface and the
//! file dialogs. It feeds scene-space pointer positions to
//! [`EditorController`] and draws each shape's [`TransformableShape::scene_corners`]
//! and, for selected shapes, its handles.

pub use warpkit_core::{
    Corner, Error, PersistenceError, Point, Rect, Result, Transform, TransformError,
    TransformMode,
};

pub use warpkit_designer::{
    CursorHint, Document, EditorController, Handle, HandleName, HandleStyle, ShapeRecord,
    TransformRecord, TransformableShape,
};

pub use warpkit_settings::{EditorSettings, SettingsError};

pub use warpkit_designer as designer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!("WarpKit {} ({}) logging initialized", VERSION, BUILD_DATE);
    Ok(())
}

/// Creates an editor configured from the settings file at the default
/// location, falling back to the built-in defaults when there is none.
pub fn editor_from_default_settings() -> anyhow::Result<EditorController> {
    let settings = match EditorSettings::default_path() {
        Ok(path) => EditorSettings::load_or_default(&path)?,
        Err(e) => {
            tracing::warn!("{}, using default settings", e);
            EditorSettings::default()
        }
    };
    Ok(EditorController::with_settings(&settings))
}
