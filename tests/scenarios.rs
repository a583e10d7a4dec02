// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end records rendered into memory, byte for byte.

use goinglogging::record::{emit_array, emit_matrix, emit_values};
use goinglogging::{CallSite, Config, Prefix, Record};
use pretty_assertions::assert_eq;

const MAIN: CallSite = CallSite::new("src/main.ext", 68, "main");

fn values(config: Config, pairs: &[(&str, &dyn goinglogging::Stringify)]) -> String {
    let mut out = Vec::new();
    emit_values(&mut out, &MAIN, config, pairs);
    String::from_utf8(out).expect("utf-8")
}

#[test]
fn file_and_line() {
    let i = 1;
    let config = Config::with_prefixes(Prefix::FILE | Prefix::LINE);
    assert_eq!(values(config, &[("i", &i)]), "main.ext:68: i = 1\n");
}

#[test]
fn two_values_no_prefix() {
    let i = 1;
    let s = String::from("s");
    let config = Config::with_prefixes(Prefix::NONE);
    assert_eq!(values(config, &[("i", &i), ("s", &s)]), "i = 1, s = \"s\"\n");
}

#[test]
fn type_marker_only() {
    let b = true;
    let config = Config::with_prefixes(Prefix::TYPE_NAME);
    assert_eq!(values(config, &[("b", &b)]), "type b = true\n");
}

#[test]
fn array() {
    let a = [0, 1, 2];
    let mut out = Vec::new();
    emit_array(&mut out, &MAIN, Config::with_prefixes(Prefix::NONE), "a", &a, 3);
    assert_eq!(out, b"a = {0, 1, 2}\n");
}

#[test]
fn matrix() {
    let m = [[11, 12], [21, 22]];
    let mut out = Vec::new();
    emit_matrix(&mut out, &MAIN, Config::with_prefixes(Prefix::NONE), "m", &m, 2, 2);
    assert_eq!(
        String::from_utf8(out).expect("utf-8"),
        "m: [0,0] = 11, [0,1] = 12, [1,0] = 21, [1,1] = 22\n"
    );
}

#[test]
fn colored() {
    let i = 1;
    let config = Config {
        color_enabled: true,
        ..Config::with_prefixes(Prefix::NONE)
    };
    assert_eq!(values(config, &[("i", &i)]), "\x1b[0;31mi = 1\x1b[0m\n");
}

#[test]
fn every_fixed_prefix_field() {
    let config = Config::with_prefixes(Prefix::FILE | Prefix::LINE | Prefix::FUNCTION);
    assert_eq!(values(config, &[("x", &'x')]), "main.ext:68, main(): x = 'x'\n");

    let config = Config::with_prefixes(Prefix::LINE | Prefix::FUNCTION);
    assert_eq!(values(config, &[("x", &'x')]), "Line: 68, main(): x = 'x'\n");
}

#[test]
fn thread_and_time_fields() {
    let config = Config::with_prefixes(Prefix::THREAD);
    let line = values(config, &[("x", &0)]);
    let expected = format!("TID: {:?}: x = 0\n", std::thread::current().id());
    assert_eq!(line, expected);

    let config = Config::with_prefixes(Prefix::TIME);
    let line = values(config, &[("x", &0)]);
    // hh:mm:ss.mmm: x = 0, or just the body when the local clock is unavailable
    if line != "x = 0\n" {
        let (time, rest) = line.split_at(12);
        assert_eq!(rest, ": x = 0\n");
        let digits: Vec<usize> = vec![0, 1, 3, 4, 6, 7, 9, 10, 11];
        for index in digits {
            assert!(time.as_bytes()[index].is_ascii_digit(), "{time}");
        }
        assert_eq!(&time[2..3], ":");
        assert_eq!(&time[5..6], ":");
        assert_eq!(&time[8..9], ".");
    }
}

#[test]
fn file_without_directories() {
    let site = CallSite::new("main.ext", 1, "main");
    let mut out = Vec::new();
    emit_values(&mut out, &site, Config::with_prefixes(Prefix::FILE), &[("i", &1)]);
    assert_eq!(out, b"main.ext: i = 1\n");
}

#[test]
fn hand_built_record() {
    let site = CallSite::new("src/lib.rs", 2, "f");
    let mut record = Record::begin(Vec::new(), &site, Config::with_prefixes(Prefix::FILE));
    record.write_field_name("v");
    record.write_value(&vec![Some(1).is_some()]);
    assert_eq!(record.finish(), b"lib.rs: v = {true}\n");
}
