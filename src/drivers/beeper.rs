// Passive buzzer on an LEDC channel
//
// Frequency is fixed by the LEDC timer at bring-up; sounding means the
// channel runs at the tone's duty, silence is duty 0. The duty is only
// rewritten on a change.

use esp_hal::ledc::channel::ChannelIFace;
use iraira_core::beep::Tone;

use crate::board::stickc::BuzzerChannel;

pub struct Beeper {
    channel: BuzzerChannel,
    volume_pct: u8,
    on: bool,
}

impl Beeper {
    pub fn new(channel: BuzzerChannel, tone: Tone) -> Self {
        Self {
            channel,
            volume_pct: tone.volume_pct.min(100),
            on: false,
        }
    }

    pub fn set(&mut self, sounding: bool) {
        if sounding == self.on {
            return;
        }
        let duty = if sounding { self.volume_pct } else { 0 };
        match self.channel.set_duty(duty) {
            Ok(()) => self.on = sounding,
            Err(e) => log::warn!("beeper: set_duty({}) failed: {:?}", duty, e),
        }
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
