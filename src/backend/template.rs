//! Root Template
//!
//! The HTML document a full page load is rendered into. A template built from
//! a string uses two placeholders:
//!
//! - `@inertiaHead` - replaced by the head fragment (SSR head tags, or nothing)
//! - `@inertia` - replaced by the root fragment (the bootstrap `div`, or the
//!   SSR body)
//!
//! The string is split once, at construction, so rendering is a concatenation.

use super::error::RenderError;
use crate::shared::BoxError;
use std::fmt;
use std::sync::Arc;

const HEAD_PLACEHOLDER: &str = "@inertiaHead";
const ROOT_PLACEHOLDER: &str = "@inertia";

/// Document used when no template is configured
pub const DEFAULT_TEMPLATE: &str = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n@inertiaHead\n</head>\n<body>\n@inertia\n</body>\n</html>\n";

/// Fragments substituted into the root template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateData {
    pub head: String,
    pub root: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Head,
    Root,
}

type RenderFn = Arc<dyn Fn(&TemplateData) -> Result<String, BoxError> + Send + Sync>;

#[derive(Clone)]
enum Inner {
    Segments(Vec<Segment>),
    Custom(RenderFn),
}

/// Root HTML template
#[derive(Clone)]
pub struct RootTemplate {
    inner: Inner,
}

impl RootTemplate {
    /// Render with an arbitrary function, for callers using a template engine
    pub fn new<F, E>(render: F) -> Self
    where
        F: Fn(&TemplateData) -> Result<String, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        let render: RenderFn = Arc::new(move |data| render(data).map_err(Into::into));
        Self {
            inner: Inner::Custom(render),
        }
    }

    /// Build a template from HTML containing the `@inertia` placeholder
    pub fn from_html(html: &str) -> Result<Self, RenderError> {
        let segments = split(html);
        if !segments.contains(&Segment::Root) {
            return Err(RenderError::template("root template has no @inertia placeholder"));
        }
        Ok(Self {
            inner: Inner::Segments(segments),
        })
    }

    /// Substitute `data` into the template
    pub fn render(&self, data: &TemplateData) -> Result<String, RenderError> {
        match &self.inner {
            Inner::Segments(segments) => {
                let mut out = String::with_capacity(
                    segments.iter().map(segment_len).sum::<usize>() + data.head.len() + data.root.len(),
                );
                for segment in segments {
                    match segment {
                        Segment::Literal(text) => out.push_str(text),
                        Segment::Head => out.push_str(&data.head),
                        Segment::Root => out.push_str(&data.root),
                    }
                }
                Ok(out)
            }
            Inner::Custom(render) => render(data).map_err(|e| RenderError::template(e.to_string())),
        }
    }
}

impl Default for RootTemplate {
    fn default() -> Self {
        Self {
            inner: Inner::Segments(split(DEFAULT_TEMPLATE)),
        }
    }
}

impl fmt::Debug for RootTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.inner {
            Inner::Segments(segments) => f.debug_struct("RootTemplate").field("segments", segments).finish(),
            Inner::Custom(_) => f.debug_struct("RootTemplate").finish_non_exhaustive(),
        }
    }
}

fn segment_len(segment: &Segment) -> usize {
    match segment {
        Segment::Literal(text) => text.len(),
        Segment::Head | Segment::Root => 0,
    }
}

fn split(html: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut rest = html;

    while let Some(pos) = rest.find(ROOT_PLACEHOLDER) {
        if pos > 0 {
            segments.push(Segment::Literal(rest[..pos].to_string()));
        }
        let tail = &rest[pos..];
        if tail.starts_with(HEAD_PLACEHOLDER) {
            segments.push(Segment::Head);
            rest = &tail[HEAD_PLACEHOLDER.len()..];
        } else {
            segments.push(Segment::Root);
            rest = &tail[ROOT_PLACEHOLDER.len()..];
        }
    }
    if !rest.is_empty() {
        segments.push(Segment::Literal(rest.to_string()));
    }

    segments
}
