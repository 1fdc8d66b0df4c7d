//! Playback control and status commands

use super::MpdClient;
use crate::protocol::error::Result;
use crate::protocol::messages::{Command, Record};

impl MpdClient {
    /// Song metadata of the currently playing song
    pub async fn currentsong(&mut self) -> Result<Record> {
        self.command_map(Command::new("currentsong")).await
    }

    /// Player and mixer status (volume, state, song position, ...)
    pub async fn status(&mut self) -> Result<Record> {
        self.command_map(Command::new("status")).await
    }

    /// Database and daemon statistics
    pub async fn stats(&mut self) -> Result<Record> {
        self.command_map(Command::new("stats")).await
    }

    /// Clear the current error reported in `status`
    pub async fn clearerror(&mut self) -> Result<()> {
        self.command_ok(Command::new("clearerror")).await
    }

    /// Start playback, optionally at the given queue position
    pub async fn play(&mut self, pos: Option<u32>) -> Result<()> {
        self.command_ok(Command::new("play").opt_arg(pos)).await
    }

    /// Start playback, optionally at the song with the given id
    pub async fn playid(&mut self, id: Option<u32>) -> Result<()> {
        self.command_ok(Command::new("playid").opt_arg(id)).await
    }

    /// Pause (`true`) or resume (`false`) playback
    pub async fn pause(&mut self, paused: bool) -> Result<()> {
        self.command_ok(Command::new("pause").flag(paused)).await
    }

    /// Stop playback
    pub async fn stop(&mut self) -> Result<()> {
        self.command_ok(Command::new("stop")).await
    }

    /// Play the next song in the queue
    pub async fn next(&mut self) -> Result<()> {
        self.command_ok(Command::new("next")).await
    }

    /// Play the previous song in the queue
    pub async fn previous(&mut self) -> Result<()> {
        self.command_ok(Command::new("previous")).await
    }

    /// Seek to `seconds` within the song at queue position `pos`
    pub async fn seek(&mut self, pos: u32, seconds: u32) -> Result<()> {
        self.command_ok(Command::new("seek").arg(pos).arg(seconds)).await
    }

    /// Seek to `seconds` within the song with the given id
    pub async fn seekid(&mut self, id: u32, seconds: u32) -> Result<()> {
        self.command_ok(Command::new("seekid").arg(id).arg(seconds)).await
    }

    /// Set the mixer volume (0-100)
    pub async fn setvol(&mut self, volume: u8) -> Result<()> {
        self.command_ok(Command::new("setvol").arg(volume)).await
    }

    /// Set the crossfade duration in seconds
    pub async fn crossfade(&mut self, seconds: u32) -> Result<()> {
        self.command_ok(Command::new("crossfade").arg(seconds)).await
    }

    /// Enable or disable consume mode
    pub async fn consume(&mut self, on: bool) -> Result<()> {
        self.command_ok(Command::new("consume").flag(on)).await
    }

    /// Enable or disable random mode
    pub async fn random(&mut self, on: bool) -> Result<()> {
        self.command_ok(Command::new("random").flag(on)).await
    }

    /// Enable or disable repeat mode
    pub async fn repeat(&mut self, on: bool) -> Result<()> {
        self.command_ok(Command::new("repeat").flag(on)).await
    }

    /// Enable or disable single mode
    pub async fn single(&mut self, on: bool) -> Result<()> {
        self.command_ok(Command::new("single").flag(on)).await
    }
}
