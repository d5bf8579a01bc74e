use crate::settings::Settings;

/// Renders the nsupdate transaction replacing the A record of
/// `settings.domain`. Values go in verbatim.
pub fn render_payload(settings: &Settings) -> String {
    format!(
        "server {server}\n\
         zone {zone}\n\
         update delete {domain}. A\n\
         update add {domain}. {ttl} A {ip}\n\
         send\n",
        server = settings.server,
        zone = settings.zone,
        domain = settings.domain,
        ttl = settings.ttl,
        ip = settings.ip,
    )
}
