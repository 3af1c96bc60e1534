//! Build-time link configuration
//!
//! `build.rs` validates link.toml and emits plain constants; this module
//! turns them into the typed configuration used by the tasks.

use pulselink_core::config::LinkConfig;
use pulselink_core::traits::PulseSettings;
use pulselink_hal::UartConfig;
use pulselink_protocol::ConsumePolicy;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/link_config.rs"));
}

pub use generated::{OUTPUT_ACTIVE_LOW, PWM_DIVIDER};

/// Host link UART settings
pub const UART: UartConfig = UartConfig::new().with_baudrate(generated::UART_BAUDRATE);

/// Link behavior
pub const LINK: LinkConfig = LinkConfig {
    consume_policy: if generated::WHOLE_FRAME {
        ConsumePolicy::WholeFrame
    } else {
        ConsumePolicy::MarkerOnly
    },
    report_overrun: generated::REPORT_OVERRUN,
    echo_period: generated::ECHO_PERIOD,
    boot_pulse: if generated::BOOT_PERIOD == 0 {
        None
    } else {
        Some(PulseSettings::from_period(generated::BOOT_PERIOD))
    },
};
