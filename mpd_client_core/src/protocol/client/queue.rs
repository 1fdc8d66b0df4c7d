//! Queue (current playlist) editing and inspection commands

use super::MpdClient;
use crate::protocol::error::Result;
use crate::protocol::messages::{Command, Record};

impl MpdClient {
    /// Append a URI to the queue
    pub async fn add(&mut self, uri: &str) -> Result<()> {
        self.command_ok(Command::new("add").arg(uri)).await
    }

    /// Append a URI and return the reply map carrying its assigned `Id`
    pub async fn addid(&mut self, uri: &str, pos: Option<u32>) -> Result<Record> {
        self.command_map(Command::new("addid").arg(uri).opt_arg(pos)).await
    }

    /// Remove every song from the queue
    pub async fn clear(&mut self) -> Result<()> {
        self.command_ok(Command::new("clear")).await
    }

    /// Remove the song at the given queue position
    pub async fn delete(&mut self, pos: u32) -> Result<()> {
        self.command_ok(Command::new("delete").arg(pos)).await
    }

    /// Remove the song with the given id
    pub async fn deleteid(&mut self, id: u32) -> Result<()> {
        self.command_ok(Command::new("deleteid").arg(id)).await
    }

    /// Move the song at `from` to position `to`
    pub async fn move_song(&mut self, from: u32, to: u32) -> Result<()> {
        self.command_ok(Command::new("move").arg(from).arg(to)).await
    }

    /// Move the song with id `id` to position `to`
    pub async fn moveid(&mut self, id: u32, to: u32) -> Result<()> {
        self.command_ok(Command::new("moveid").arg(id).arg(to)).await
    }

    /// Shuffle the queue
    pub async fn shuffle(&mut self) -> Result<()> {
        self.command_ok(Command::new("shuffle")).await
    }

    /// Swap the songs at two queue positions
    pub async fn swap(&mut self, pos1: u32, pos2: u32) -> Result<()> {
        self.command_ok(Command::new("swap").arg(pos1).arg(pos2)).await
    }

    /// Swap two songs by id
    pub async fn swapid(&mut self, id1: u32, id2: u32) -> Result<()> {
        self.command_ok(Command::new("swapid").arg(id1).arg(id2)).await
    }

    /// Song records of the queue, optionally limited to a position range
    pub async fn playlistinfo(&mut self, range: Option<(u32, u32)>) -> Result<Vec<Record>> {
        let cmd = Command::new("playlistinfo")
            .opt_arg(range.map(|(start, end)| format!("{start}:{end}")));
        self.command_records(cmd).await
    }

    /// Song records of the queue by id, or a single song's record
    pub async fn playlistid(&mut self, id: Option<u32>) -> Result<Vec<Record>> {
        self.command_records(Command::new("playlistid").opt_arg(id)).await
    }

    /// Songs changed in the queue since the given playlist version
    pub async fn plchanges(&mut self, version: u32) -> Result<Vec<Record>> {
        self.command_records(Command::new("plchanges").arg(version)).await
    }

    /// Position/id pairs of songs changed since the given playlist version
    pub async fn plchangesposid(&mut self, version: u32) -> Result<Vec<Record>> {
        self.command_records(Command::new("plchangesposid").arg(version)).await
    }

    /// Queue songs whose tag exactly matches the needle
    pub async fn playlistfind(&mut self, tag: &str, needle: &str) -> Result<Vec<Record>> {
        self.command_records(Command::new("playlistfind").arg(tag).arg(needle)).await
    }

    /// Queue songs whose tag matches the needle case-insensitively
    pub async fn playlistsearch(&mut self, tag: &str, needle: &str) -> Result<Vec<Record>> {
        self.command_records(Command::new("playlistsearch").arg(tag).arg(needle)).await
    }
}
