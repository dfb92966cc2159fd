//! Receiver glue binding the decoder, registry, and diagnostics together.
//!
//! [`ReceiverSession`] is the piece that sits between the socket loop and
//! the reassembly core: it decodes each inbound datagram payload, routes
//! every well-formed line, drops malformed records and rejected writes as
//! recoverable, and reports what happened. Session construction and
//! teardown bound the lifetime of all image state for one receiving run.

use log::{debug, info, trace, warn};

use crate::{
    diagnostics::{DiagnosticToggles, hex_dump},
    image::ImageBuffer,
    packet::{ImageId, LinePacket, decode_datagram},
    registry::ImageRegistry,
};

/// What one datagram contributed to the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatagramSummary {
    /// Lines accepted into image buffers.
    pub lines_routed: usize,
    /// Records dropped as malformed or rejected by the registry.
    pub lines_dropped: usize,
    /// Images whose final line arrived in this datagram.
    pub completed: Vec<ImageId>,
}

/// One receiving run's worth of reassembly state.
///
/// # Examples
///
/// ```
/// use rasterline::session::ReceiverSession;
///
/// let mut session = ReceiverSession::default();
/// // An empty payload cannot carry a record count and is dropped whole.
/// let summary = session.handle_datagram(&[]);
/// assert_eq!(summary.lines_routed, 0);
/// ```
#[derive(Debug, Default)]
pub struct ReceiverSession {
    registry: ImageRegistry,
    toggles: DiagnosticToggles,
}

impl ReceiverSession {
    /// Create a session with the given diagnostic toggles.
    #[must_use]
    pub fn new(toggles: DiagnosticToggles) -> Self {
        Self {
            registry: ImageRegistry::new(),
            toggles,
        }
    }

    /// Create a session around an already configured registry.
    #[must_use]
    pub fn with_registry(registry: ImageRegistry, toggles: DiagnosticToggles) -> Self {
        Self { registry, toggles }
    }

    /// Read access to the image buffers for the display collaborator.
    #[must_use]
    pub fn registry(&self) -> &ImageRegistry { &self.registry }

    /// Mutable access, e.g. to retire displayed or stale images.
    pub fn registry_mut(&mut self) -> &mut ImageRegistry { &mut self.registry }

    /// Decode one datagram payload and route every line it carries.
    ///
    /// All failures here are recoverable by design: an undecodable payload
    /// or record is logged and dropped, and processing continues with
    /// whatever else arrives.
    pub fn handle_datagram(&mut self, payload: &[u8]) -> DatagramSummary {
        if self.toggles.print_hex_log {
            trace!(
                "datagram payload ({} bytes):\n{}",
                payload.len(),
                hex_dump(payload),
            );
        }

        let mut summary = DatagramSummary::default();

        let records = match decode_datagram(payload) {
            Ok(records) => records,
            Err(err) => {
                warn!("dropping undecodable datagram: {err}");
                return summary;
            }
        };

        for record in records {
            match record {
                Ok(packet) => self.route_packet(&packet, &mut summary),
                Err(err) => {
                    summary.lines_dropped += 1;
                    warn!("dropping malformed line record: {err}");
                }
            }
        }

        summary
    }

    fn route_packet(&mut self, packet: &LinePacket, summary: &mut DatagramSummary) {
        let header = packet.header();
        let id = header.image_id();

        if self.toggles.print_new_headers && !self.registry.contains(id) {
            info!(
                "new image {id}: {} at t={}, first line {}",
                header.geometry(),
                header.timestamp(),
                header.line_index(),
            );
        }
        let was_done = self.registry.get(id).is_some_and(ImageBuffer::is_done);

        match self.registry.route_line(packet) {
            Ok(buffer) => {
                summary.lines_routed += 1;
                if self.toggles.extra_debug_info {
                    debug!(
                        "image {id} line {}: {}/{} lines, valid={}",
                        header.line_index(),
                        buffer.lines_received(),
                        buffer.geometry().height(),
                        buffer.is_valid(),
                    );
                }
                if !was_done && buffer.is_done() {
                    summary.completed.push(id);
                }
            }
            Err(err) => {
                summary.lines_dropped += 1;
                warn!("dropping line for image {id}: {err}");
            }
        }
    }
}
