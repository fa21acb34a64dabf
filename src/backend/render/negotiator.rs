//! Render Negotiator
//!
//! Picks the response for a render call from the request headers:
//!
//! 1. Stale client assets on a GET navigation: 409 with `X-Inertia-Location`,
//!    nothing is evaluated.
//! 2. Partial reload of this component: only the requested props, deferred
//!    ones included, as JSON.
//! 3. Client-side navigation: the full page as JSON.
//! 4. Browser navigation with SSR configured: the SSR markup, or the
//!    bootstrap document when the sidecar cannot be reached.
//! 5. Browser navigation: the bootstrap document.

use super::{emit, RenderContext, Renderer};
use crate::backend::error::RenderError;
use crate::backend::template::TemplateData;
use crate::props::Props;
use crate::shared::ResolvedPage;
use axum::response::Response;
use std::collections::BTreeMap;

pub(super) async fn negotiate(
    renderer: &Renderer,
    context: &mut RenderContext,
    component: &str,
    props: Props,
) -> Result<Response, RenderError> {
    let manifest_version = renderer.manifest_version();

    if context.info.is_version_conflict(manifest_version) {
        tracing::info!(
            url = %context.info.url(),
            client = ?context.info.client_version(),
            server = %manifest_version,
            "Asset version changed, forcing a full reload"
        );
        return Ok(emit::location(context.info.url()));
    }

    context.store.checkpoint();
    for (name, prop) in props {
        context.store.set(name, prop);
    }

    let partial = context.info.is_partial_for(component);
    if partial {
        context.store.load_deferred();
        if !context.info.only_props().is_empty() {
            context.store.only(context.info.only_props().to_vec());
        }
        if !context.info.except_props().is_empty() {
            context.store.except(context.info.except_props().to_vec());
        }
    }

    let cancel = context.cancel.clone();
    let props = context.store.get_props(cancel).await?.clone();

    let page = ResolvedPage {
        component: component.to_string(),
        url: context.info.url().to_string(),
        props,
        version: manifest_version.to_string(),
        encrypt_history: context.encrypt_history,
        clear_history: context.clear_history,
        deferred_props: if partial {
            BTreeMap::new()
        } else {
            context.store.deferred_props().clone()
        },
    };

    if partial || context.info.is_inertia() {
        tracing::debug!(component = %component, partial, props = page.props.len(), "Rendering JSON page");
        return emit::json(context.status, &page);
    }

    if let Some(ssr) = renderer.ssr() {
        match ssr.render(&page).await {
            Ok(rendered) => {
                let document = renderer.template().render(&TemplateData {
                    head: rendered.head_html(),
                    root: rendered.body,
                })?;
                return Ok(emit::html(context.status, document));
            }
            Err(err) if err.is_communication() => {
                tracing::warn!(component = %component, error = %err, "SSR unavailable, falling back to client-side rendering");
            }
            Err(err) => return Err(err.into()),
        }
    }

    let document = renderer.template().render(&TemplateData {
        head: String::new(),
        root: emit::bootstrap_root(&page)?,
    })?;
    Ok(emit::html(context.status, document))
}
