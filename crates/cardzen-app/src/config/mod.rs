use std::sync::Arc;

use salvo::async_trait;
pub use cardzen_core::config::*;
use cardzen_vcard::VcfRenderer;

use crate::error::{AppError, AppResult};

/// Injects a renderer built from the loaded settings into every request.
pub struct ConfigHandler {
    renderer: Arc<VcfRenderer>,
}

impl ConfigHandler {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        let renderer = VcfRenderer::from_config(&settings.vcard);
        tracing::debug!(
            options = ?renderer.options(),
            photo_dir = ?settings.vcard.photo_dir,
            "Renderer configured"
        );

        Self {
            renderer: Arc::new(renderer),
        }
    }
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    #[tracing::instrument(skip(self, _req, depot, _res, _ctrl))]
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut salvo::Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.renderer));
    }
}

/// ## Summary
/// Retrieves the shared renderer from the depot.
///
/// ## Errors
/// Returns an error if no renderer was injected for this request.
pub fn get_renderer_from_depot(depot: &salvo::Depot) -> AppResult<Arc<VcfRenderer>> {
    depot.obtain::<Arc<VcfRenderer>>().cloned().map_err(|_err| {
        AppError::CoreError(cardzen_core::error::CoreError::InvariantViolation(
            "Renderer not found in depot",
        ))
    })
}
