//! Save directory scanning: file selection, ownership marker, owned-status filtering.
use flate2::Compression;
use flate2::write::GzEncoder;
use pokedex_bot::error::PokedexError;
use pokedex_bot::saves::archive::{decode, decode_bytes};
use pokedex_bot::saves::{TextExtractor, scan};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn write_plain(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).unwrap();
}

fn gzip(body: &str) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(body.as_bytes()).unwrap();
    enc.finish().unwrap()
}

fn ids(set: &pokedex_bot::saves::AcquisitionSet) -> Vec<i32> {
    set.iter().collect()
}

#[tokio::test]
async fn plain_save_yields_owned_ids_only() {
    let dir = TempDir::new().unwrap();
    write_plain(dir.path(), "ash.pk", "player: Ash\n1:2, 4:1, 7:2\n");
    let caught = scan(dir.path(), "Ash").await.unwrap();
    assert_eq!(ids(&caught), vec![1, 7]);
}

#[tokio::test]
async fn gzip_save_is_inflated() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("ash.pk"), gzip("player Ash 25:2 133:2 150:0")).unwrap();
    let caught = scan(dir.path(), "Ash").await.unwrap();
    assert_eq!(ids(&caught), vec![25, 133]);
}

#[tokio::test]
async fn matching_files_are_unioned_without_duplicates() {
    let dir = TempDir::new().unwrap();
    write_plain(dir.path(), "a.pk", "player Ash 1:2 2:2");
    std::fs::write(dir.path().join("b.pk"), gzip("player Ash 2:2 3:2")).unwrap();
    let caught = scan(dir.path(), "Ash").await.unwrap();
    assert_eq!(caught.len(), 3);
    assert_eq!(ids(&caught), vec![1, 2, 3]);
}

#[tokio::test]
async fn other_players_and_other_extensions_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_plain(dir.path(), "misty.pk", "player Misty 120:2");
    write_plain(dir.path(), "ash.txt", "player Ash 11:2");
    write_plain(dir.path(), "ash.pk.bak", "player Ash 12:2");
    let caught = scan(dir.path(), "Ash").await.unwrap();
    assert!(caught.is_empty());
}

#[tokio::test]
async fn player_match_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    write_plain(dir.path(), "ash.pk", "PLAYER\n  ASH\n3:2");
    let caught = scan(dir.path(), "ash").await.unwrap();
    assert_eq!(ids(&caught), vec![3]);
}

#[tokio::test]
async fn name_must_follow_player_token() {
    let dir = TempDir::new().unwrap();
    write_plain(dir.path(), "x.pk", "Ash 9:2 player");
    let caught = scan(dir.path(), "Ash").await.unwrap();
    assert!(caught.is_empty());
}

#[tokio::test]
async fn regex_metacharacters_in_name_are_literal() {
    let dir = TempDir::new().unwrap();
    write_plain(dir.path(), "literal.pk", "player a.b*c 5:2");
    // Would match `a.b*c` if the name were compiled as a pattern.
    write_plain(dir.path(), "lookalike.pk", "player aXbbbc 6:2");
    let caught = scan(dir.path(), "a.b*c").await.unwrap();
    assert_eq!(ids(&caught), vec![5]);
}

#[tokio::test]
async fn corrupt_archive_is_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("broken.pk"),
        [0x1f_u8, 0x8b, 0xde, 0xad, 0xbe, 0xef],
    )
    .unwrap();
    write_plain(dir.path(), "ok.pk", "player Ash 4:2");
    let caught = scan(dir.path(), "Ash").await.unwrap();
    assert_eq!(ids(&caught), vec![4]);
}

#[tokio::test]
async fn empty_directory_gives_empty_set() {
    let dir = TempDir::new().unwrap();
    let caught = scan(dir.path(), "Ash").await.unwrap();
    assert!(caught.is_empty());
}

#[tokio::test]
async fn missing_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope");
    let err = scan(&missing, "Ash").await.unwrap_err();
    assert!(matches!(err, PokedexError::SaveDirectory { .. }));
}

#[tokio::test]
async fn decode_reports_corrupt_gzip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.pk");
    std::fs::write(&path, [0x1f_u8, 0x8b, 0x00]).unwrap();
    let err = decode(&path).await.unwrap_err();
    assert!(matches!(
        err,
        pokedex_bot::error::ArchiveError::Corrupt { .. }
    ));
}

#[tokio::test]
async fn decode_reports_unreadable_file() {
    let dir = TempDir::new().unwrap();
    let err = decode(&dir.path().join("absent.pk")).await.unwrap_err();
    assert!(matches!(err, pokedex_bot::error::ArchiveError::Io { .. }));
}

#[test]
fn decode_bytes_inflates_gzip() {
    assert_eq!(decode_bytes(gzip("player Ash")).unwrap(), b"player Ash");
}

#[test]
fn extractor_skips_out_of_range_pairs() {
    let extractor = TextExtractor::for_player("Ash").unwrap();
    let owned = extractor.owned_ids("99999999999:2 8:2 8:2 9:22");
    assert_eq!(owned.iter().collect::<Vec<_>>(), vec![8]);
}

#[test]
fn extractor_returns_none_for_foreign_save() {
    let extractor = TextExtractor::for_player("Ash").unwrap();
    assert!(extractor.extract("player Brock 1:2").is_none());
    assert_eq!(
        extractor.extract("player Brock, rival Ash 1:2").map(|s| s.len()),
        Some(1)
    );
}

#[tokio::test]
async fn multi_member_gzip_is_fully_inflated() {
    let dir = TempDir::new().unwrap();
    let mut body = gzip("player Ash 1:2 ");
    body.extend(gzip("7:2 9:2"));
    std::fs::write(dir.path().join("ash.pk"), &body).unwrap();
    assert_eq!(decode_bytes(body).unwrap(), b"player Ash 1:2 7:2 9:2");
    let caught = scan(dir.path(), "Ash").await.unwrap();
    assert_eq!(ids(&caught), vec![1, 7, 9]);
}

#[test]
fn non_ascii_digits_do_not_swallow_pairs() {
    let extractor = TextExtractor::for_player("Ash").unwrap();
    let owned = extractor.owned_ids("player Ash \u{0663}7:2 \u{FF11}5:2");
    assert_eq!(owned.iter().collect::<Vec<_>>(), vec![5, 7]);
}
