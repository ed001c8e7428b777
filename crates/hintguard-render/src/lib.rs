//! Rendering utilities for CI surfaces (Markdown, GitHub annotations, MSBuild log lines).

#![forbid(unsafe_code)]

mod gha;
mod markdown;
mod model;
mod msbuild;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use model::{
    RenderableData, RenderableFinding, RenderableLocation, RenderableReport, RenderableSeverity,
    RenderableVerdictStatus,
};
pub use msbuild::{BuildLevel, BuildLogContext, BuildMessage, render_build_message};
