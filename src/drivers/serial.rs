// Telemetry sinks
//
// Console: the USB serial console through esp-println. Log output goes
// to the same console, so per-event logs stay at debug and only the
// telemetry lines show up at the default level.
//
// Wireless: UART1 into a Bluetooth serial bridge on the grove port.
// Writes only fill the hardware FIFO; a stalled bridge drops lines
// instead of stalling the loop, and a line the FIFO only half took is
// finished before the next one starts.

use esp_hal::uart::TxError;
use iraira_core::telemetry::{ByteTx, LineTx, Sink, SinkError};

use crate::board::WirelessUart;

pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn send(&mut self, line: &str) -> Result<(), SinkError> {
        esp_println::print!("{}", line);
        Ok(())
    }
}

pub struct UartTx {
    uart: WirelessUart,
}

impl UartTx {
    pub fn new(uart: WirelessUart) -> Self {
        Self { uart }
    }
}

impl ByteTx for UartTx {
    fn try_write(&mut self, bytes: &[u8]) -> Result<usize, SinkError> {
        // write() waits for FIFO room; don't call it while full
        if bytes.is_empty() || !self.uart.write_ready() {
            return Ok(0);
        }
        self.uart.write(bytes).map_err(|e: TxError| {
            log::trace!("uart: {:?}", e);
            SinkError::Bus
        })
    }
}

pub type UartSink = LineTx<UartTx>;
