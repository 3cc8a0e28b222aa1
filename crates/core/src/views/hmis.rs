//! HMIS intake wizard and data export
//!
//! The intake submits a HUD-coded client profile followed by an enrollment
//! record. Export hands the decoded archive to the caller; what happens to
//! the bytes (download, save dialog) is the shell's concern.

use std::sync::Arc;

use brick_domain::{HmisArchive, HmisClientProfile, HmisEnrollment, Result};
use tracing::{info, instrument};

use crate::gateway_ports::HmisGateway;
use crate::session::ports::UiSignal;

pub struct HmisService {
    gateway: Arc<dyn HmisGateway>,
    signals: Arc<dyn UiSignal>,
}

impl HmisService {
    pub fn new(gateway: Arc<dyn HmisGateway>, signals: Arc<dyn UiSignal>) -> Self {
        Self { gateway, signals }
    }

    /// Submit a completed intake: client profile, then enrollment
    ///
    /// The profile must land before the enrollment references it, so the
    /// two posts are sequential, not concurrent. A failure in either step
    /// surfaces one error and changes nothing locally.
    #[instrument(skip(self, profile, enrollment))]
    pub async fn submit_intake(
        &self,
        profile: &HmisClientProfile,
        enrollment: &HmisEnrollment,
    ) -> Result<()> {
        if let Err(err) = self.gateway.submit_client_profile(profile).await {
            self.signals.error("Failed to save the intake. Please try again.");
            return Err(err);
        }

        match self.gateway.submit_enrollment(enrollment).await {
            Ok(()) => {
                info!("HMIS intake submitted");
                self.signals.success("Intake complete! Your information has been saved securely.");
                Ok(())
            }
            Err(err) => {
                self.signals.error("Failed to save the enrollment. Please try again.");
                Err(err)
            }
        }
    }

    /// `GET /hmis/export/csv`, decoded to (filename, bytes)
    #[instrument(skip(self))]
    pub async fn export_archive(&self) -> Result<HmisArchive> {
        match self.gateway.export_archive().await {
            Ok(archive) => {
                info!(filename = %archive.filename, bytes = archive.bytes.len(), "HMIS export ready");
                Ok(archive)
            }
            Err(err) => {
                self.signals.error("Failed to export HMIS data");
                Err(err)
            }
        }
    }
}
