//! Music database query commands

use super::MpdClient;
use crate::protocol::error::Result;
use crate::protocol::messages::{Command, Record};

impl MpdClient {
    /// Songs whose tag exactly matches the needle
    pub async fn find(&mut self, tag: &str, needle: &str) -> Result<Vec<Record>> {
        self.command_records(Command::new("find").arg(tag).arg(needle)).await
    }

    /// Songs whose tag matches the needle case-insensitively
    pub async fn search(&mut self, tag: &str, needle: &str) -> Result<Vec<Record>> {
        self.command_records(Command::new("search").arg(tag).arg(needle)).await
    }

    /// Distinct values of a tag, optionally limited to one artist
    pub async fn list(&mut self, tag: &str, artist: Option<&str>) -> Result<Vec<String>> {
        self.command_values(Command::new("list").arg(tag).opt_arg(artist)).await
    }

    /// Every file and directory path below the given URI
    pub async fn listall(&mut self, uri: Option<&str>) -> Result<Vec<String>> {
        self.command_values(Command::new("listall").opt_arg(uri)).await
    }

    /// Song records of everything below the given URI
    pub async fn listallinfo(&mut self, uri: Option<&str>) -> Result<Vec<Record>> {
        self.command_records(Command::new("listallinfo").opt_arg(uri)).await
    }

    /// Directory listing with metadata for the given URI
    pub async fn lsinfo(&mut self, uri: Option<&str>) -> Result<Vec<Record>> {
        self.command_records(Command::new("lsinfo").opt_arg(uri)).await
    }

    /// Song count and total playtime of songs matching a tag value
    pub async fn count(&mut self, tag: &str, needle: &str) -> Result<Record> {
        self.command_map(Command::new("count").arg(tag).arg(needle)).await
    }

    /// Trigger a database update; the reply carries the `updating_db` job id
    pub async fn update(&mut self, uri: Option<&str>) -> Result<Record> {
        self.command_map(Command::new("update").opt_arg(uri)).await
    }

    /// Like `update`, but rescans unmodified files too
    pub async fn rescan(&mut self, uri: Option<&str>) -> Result<Record> {
        self.command_map(Command::new("rescan").opt_arg(uri)).await
    }
}
