//! Output formatting for reply maps and record lists

use colored::Colorize;
use mpd_client_core::Record;

/// Known song tags in display order; everything else follows alphabetically
const SONG_KEYS: &[&str] = &["file", "Artist", "Album", "Title", "Track", "Time"];

/// Print a key/value map with aligned, colored keys
pub fn print_map(map: &Record, color: bool) {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort();
    let width = keys.iter().map(|k| k.len()).max().unwrap_or(0);

    for key in keys {
        let value = &map[key];
        if color {
            println!("{:>width$}: {value}", key.as_str().cyan(), width = width);
        } else {
            println!("{key:>width$}: {value}");
        }
    }
}

/// Print one line per song record, `mpc`-style
pub fn print_songs(records: &[Record], color: bool) {
    for record in records {
        // The parser's trailing-record quirk can yield one empty record
        // for an empty queue; nothing to print in that case
        if record.is_empty() {
            continue;
        }
        println!("{}", format_song(record, color));
    }
}

/// One-line song description: artist - title, falling back to the file path
pub fn format_song(record: &Record, color: bool) -> String {
    match (record.get("Artist"), record.get("Title")) {
        (Some(artist), Some(title)) => {
            if color {
                format!("{} - {}", artist.bold(), title)
            } else {
                format!("{artist} - {title}")
            }
        }
        _ => record.get("file").cloned().unwrap_or_default(),
    }
}

/// Print a full record with the well-known song keys first
pub fn print_record(record: &Record, color: bool) {
    let mut rest: Vec<&String> = record
        .keys()
        .filter(|k| !SONG_KEYS.contains(&k.as_str()))
        .collect();
    rest.sort();

    let ordered = SONG_KEYS
        .iter()
        .filter_map(|k| record.get_key_value(*k))
        .chain(rest.into_iter().map(|k| (k, &record[k])));

    for (key, value) in ordered {
        if color {
            println!("{}: {value}", key.as_str().cyan());
        } else {
            println!("{key}: {value}");
        }
    }
}
