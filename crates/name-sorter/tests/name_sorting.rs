use name_sorter::lines::{read_lines_from, FileLineSink, FileLineSource, LineSink, LineSource};
use name_sorter::{sort_names, NameFormatError};
use std::fs;

fn expected_sorted() -> Vec<&'static str> {
    vec![
        "Marin Alvarez",
        "Adonis Julius Archer",
        "Beau Tristan Bentley",
        "Hunter Uriah Mathew Clarke",
        "Leo Gardner",
        "Vaughn Lewis",
        "London Lindsey",
        "Mikayla Lopez",
        "Janet Parsons",
        "Frankie Conner Ritter",
        "Shelby Nathan Yoder",
    ]
}

#[test]
fn sorts_bundled_name_list() {
    let data = include_bytes!("data/unsorted-names-list.txt");
    let names = read_lines_from(&data[..]).expect("fixture reads");
    assert_eq!(names.len(), 11);

    let sorted = sort_names(&names).expect("fixture names are valid");
    assert_eq!(sorted, expected_sorted());
}

#[test]
fn file_round_trip_preserves_sorted_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("unsorted-names-list.txt");
    let output = dir.path().join("sorted-names-list.txt");
    fs::write(
        &input,
        "\n  Janet Parsons \n\nVaughn Lewis\n   \nAdonis Julius Archer\n",
    )
    .expect("seed input");

    let names = FileLineSource::new(&input).read_lines().expect("input reads");
    let sorted = sort_names(&names).expect("names sort");
    FileLineSink::new(&output)
        .write_lines(&sorted)
        .expect("output writes");

    assert_eq!(
        fs::read_to_string(&output).expect("output readable"),
        "Adonis Julius Archer\nVaughn Lewis\nJanet Parsons\n"
    );
    let reread = FileLineSource::new(&output).read_lines().expect("output reads");
    assert_eq!(reread, sorted);
}

#[test]
fn invalid_entry_in_file_fails_the_whole_sort() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("names.txt");
    fs::write(&input, "Leo Gardner\nJohn Michael David Robert Smith\nMarin Alvarez\n")
        .expect("seed input");

    let names = FileLineSource::new(&input).read_lines().expect("input reads");
    let err = sort_names(&names).expect_err("five-token name rejected");
    assert_eq!(
        err,
        NameFormatError::TooManyGivenNames {
            raw: "John Michael David Robert Smith".to_string()
        }
    );
}

#[test]
fn empty_file_sorts_and_writes_nothing() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = dir.path().join("blank.txt");
    let output = dir.path().join("sorted.txt");
    fs::write(&input, "\n \n\t\n").expect("seed input");

    let names = FileLineSource::new(&input).read_lines().expect("input reads");
    assert!(names.is_empty());
    let sorted = sort_names(&names).expect("empty input sorts");
    FileLineSink::new(&output)
        .write_lines(&sorted)
        .expect("output writes");

    assert_eq!(fs::metadata(&output).expect("output exists").len(), 0);
}
