use crate::{
    error::UpdateError,
    nsupdate::{build_invocation, render_payload, Console, ToolExit, UpdateTool},
    settings::Settings,
};
use log::{debug, info, warn};

/// One dynamic DNS update: render the transaction for `settings` and hand it
/// to the update tool.
pub struct DynDnsUpdate<T> {
    settings: Settings,
    tool: T,
}

impl<T: UpdateTool> DynDnsUpdate<T> {
    pub fn new(settings: Settings, tool: T) -> Self {
        Self { settings, tool }
    }

    pub async fn run(&self, console: &mut dyn Console) -> Result<ToolExit, UpdateError> {
        let payload = render_payload(&self.settings);
        let invocation = build_invocation(&self.settings);

        info!(
            "Updating {} -> {} via {} ({})",
            self.settings.domain,
            self.settings.ip,
            self.settings.server,
            invocation.program.display()
        );
        debug!("nsupdate argv: {:?}", invocation.argv());
        debug!("nsupdate input:\n{}", payload);

        let exit = self.tool.submit(&invocation, &payload, console).await?;

        if exit.success() {
            info!("Done.");
        } else {
            match exit.code {
                Some(code) => warn!("nsupdate exited with status {}", code),
                None => warn!("nsupdate was terminated by a signal"),
            }
        }

        Ok(exit)
    }
}
