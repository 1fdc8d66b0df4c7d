//! Stored playlist commands

use super::MpdClient;
use crate::protocol::error::Result;
use crate::protocol::messages::{Command, Record};

impl MpdClient {
    /// Records of the stored playlists (name and last-modified)
    pub async fn listplaylists(&mut self) -> Result<Vec<Record>> {
        self.command_records(Command::new("listplaylists")).await
    }

    /// File URIs of a stored playlist
    pub async fn listplaylist(&mut self, name: &str) -> Result<Vec<String>> {
        self.command_values(Command::new("listplaylist").arg(name)).await
    }

    /// Song records of a stored playlist
    pub async fn listplaylistinfo(&mut self, name: &str) -> Result<Vec<Record>> {
        self.command_records(Command::new("listplaylistinfo").arg(name)).await
    }

    /// Append a stored playlist to the queue
    pub async fn load(&mut self, name: &str) -> Result<()> {
        self.command_ok(Command::new("load").arg(name)).await
    }

    /// Save the queue as a stored playlist
    pub async fn save(&mut self, name: &str) -> Result<()> {
        self.command_ok(Command::new("save").arg(name)).await
    }

    /// Delete a stored playlist
    pub async fn rm(&mut self, name: &str) -> Result<()> {
        self.command_ok(Command::new("rm").arg(name)).await
    }

    /// Rename a stored playlist
    pub async fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        self.command_ok(Command::new("rename").arg(old).arg(new)).await
    }

    /// Append a URI to a stored playlist
    pub async fn playlistadd(&mut self, name: &str, uri: &str) -> Result<()> {
        self.command_ok(Command::new("playlistadd").arg(name).arg(uri)).await
    }

    /// Remove every song from a stored playlist
    pub async fn playlistclear(&mut self, name: &str) -> Result<()> {
        self.command_ok(Command::new("playlistclear").arg(name)).await
    }

    /// Remove the song at the given position from a stored playlist
    pub async fn playlistdelete(&mut self, name: &str, pos: u32) -> Result<()> {
        self.command_ok(Command::new("playlistdelete").arg(name).arg(pos)).await
    }

    /// Move a song within a stored playlist
    pub async fn playlistmove(&mut self, name: &str, from: u32, to: u32) -> Result<()> {
        self.command_ok(Command::new("playlistmove").arg(name).arg(from).arg(to)).await
    }
}
