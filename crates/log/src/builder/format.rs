//! Format layer creation

use tracing_subscriber::Registry;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::Layer;

use crate::config::{DisplayConfig, Format};

pub(super) type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Applies the options every text format shares.
macro_rules! decorate {
    ($layer:expr, $display:expr) => {
        $layer
            .with_writer(std::io::stderr)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
    };
}

/// Builds the formatting layer for `format`; events go to stderr.
pub(super) fn fmt_layer(format: Format, display: &DisplayConfig) -> BoxedLayer {
    match (format, display.time) {
        (Format::Pretty, true) => decorate!(fmt::layer().pretty(), display).boxed(),
        (Format::Pretty, false) => decorate!(fmt::layer().pretty().without_time(), display).boxed(),
        (Format::Compact, true) => decorate!(fmt::layer().compact(), display).boxed(),
        (Format::Compact, false) => {
            decorate!(fmt::layer().compact().without_time(), display).boxed()
        }
        (Format::Json, true) => decorate!(
            fmt::layer()
                .json()
                .with_current_span(true)
                .flatten_event(display.flatten),
            display
        )
        .boxed(),
        (Format::Json, false) => decorate!(
            fmt::layer()
                .json()
                .with_current_span(true)
                .flatten_event(display.flatten)
                .without_time(),
            display
        )
        .boxed(),
    }
}
