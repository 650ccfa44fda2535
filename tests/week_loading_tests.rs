mod support;

use timetable_backend::algorithm::{
    find_free_rooms, list_subjects, match_timeslot, resolve, resolve_day, timeslots, SnapshotStore, WeekSnapshot,
};
use timetable_backend::excel::{load_day_file, purge_non_weekday_files, write_sheet_values};
use timetable_backend::models::{RegionKind, Weekday};
use timetable_backend::TimetableError;

fn subjects(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_load_day_file_promotes_timeslot_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = support::write_day(dir.path(), "Monday");

    let table = load_day_file(&path, Weekday::Monday).expect("Debe cargar la hoja");
    assert_eq!(
        table.headers,
        vec!["Room", "8:00-9:20", "9:30-10:50", "11:00 - 1:30 (inc. 10 min. break)"]
    );
    assert_eq!(table.rows.len(), 6);
}

#[test]
fn test_week_regions_partition_day() {
    let dir = tempfile::tempdir().unwrap();
    support::write_day(dir.path(), "Monday");
    let week = WeekSnapshot::load(dir.path()).unwrap();

    let monday = week.day(Weekday::Monday).unwrap();
    assert_eq!(monday.classes.table.rows.len(), 3);
    assert_eq!(monday.labs.table.rows.len(), 2);
    // el marcador no pertenece a ninguna región
    assert_eq!(monday.classes.table.rows.len() + monday.labs.table.rows.len() + 1, monday.table.rows.len());
    assert_eq!(monday.labs.table.headers, vec!["Lab", "8:00-10:50", "11:00-1:30"]);
}

#[test]
fn test_rebuild_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    support::write_day(dir.path(), "Monday");
    support::write_day(dir.path(), "Wednesday");

    let a = WeekSnapshot::load(dir.path()).unwrap();
    let b = WeekSnapshot::load(dir.path()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.list_days(), vec!["Monday", "Wednesday"]);
}

#[test]
fn test_timeslots_exclude_marker_column() {
    let dir = tempfile::tempdir().unwrap();
    support::write_day(dir.path(), "Monday");
    let week = WeekSnapshot::load(dir.path()).unwrap();

    let rooms = timeslots(&week, Weekday::Monday, RegionKind::Class).unwrap();
    assert_eq!(rooms, vec!["8:00-9:20", "9:30-10:50", "11:00 - 1:30 (inc. 10 min. break)"]);
    let labs = timeslots(&week, Weekday::Monday, RegionKind::Lab).unwrap();
    assert_eq!(labs, vec!["8:00-10:50", "11:00-1:30"]);

    let err = timeslots(&week, Weekday::Tuesday, RegionKind::Class).unwrap_err();
    assert!(matches!(err, TimetableError::UnknownDay(_)));
}

#[test]
fn test_resolve_uses_first_room_per_day() {
    let dir = tempfile::tempdir().unwrap();
    support::write_day(dir.path(), "Monday");
    support::write_day(dir.path(), "Wednesday");
    let week = WeekSnapshot::load(dir.path()).unwrap();

    let entries = resolve(&subjects(&["Calculus"]), &week);
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].day, Weekday::Monday);
    assert_eq!(entries[1].day, Weekday::Wednesday);
    for e in &entries {
        assert_eq!(e.room, "R5");
        assert_eq!(e.time, "8:00-9:20");
        assert_eq!(e.start_time, "8:00");
        assert_eq!(e.end_time, "9:20");
    }

    // la entrada devuelta coincide con la celda de la hoja
    let monday = week.day(Weekday::Monday).unwrap();
    let row = monday.classes.table.rows.iter().position(|r| r[0].equals("R5")).unwrap();
    let col = monday.classes.table.column_index("8:00-9:20").unwrap();
    assert!(monday.classes.table.cell(row, col).equals("Calculus"));
}

#[test]
fn test_resolve_labs_and_absent_subject() {
    let dir = tempfile::tempdir().unwrap();
    support::write_day(dir.path(), "Monday");
    let week = WeekSnapshot::load(dir.path()).unwrap();

    let entries = resolve(&subjects(&["Networks Lab", "Astronomy"]), &week);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].room, "Lab-2");
    assert_eq!(entries[0].time, "11:00-1:30");
    assert_eq!(entries[0].end_time, "1:30");

    assert!(resolve(&subjects(&["Astronomy"]), &week).is_empty());
    assert!(resolve(&[], &week).is_empty());
    assert!(matches!(
        resolve_day(&subjects(&["Calculus"]), Weekday::Friday, &week),
        Err(TimetableError::UnknownDay(_))
    ));
}

#[test]
fn test_free_rooms_in_loaded_week() {
    let dir = tempfile::tempdir().unwrap();
    support::write_day(dir.path(), "Monday");
    let week = WeekSnapshot::load(dir.path()).unwrap();
    let monday = week.day(Weekday::Monday).unwrap();

    assert_eq!(find_free_rooms(&monday.classes, "8:00-9:20").unwrap(), vec!["R6"]);
    assert_eq!(find_free_rooms(&monday.classes, "9:30-10:50").unwrap(), vec!["R5", "R6"]);
    assert_eq!(find_free_rooms(&monday.classes, "11:00-1:30").unwrap(), vec!["R6", "R7"]);
    assert_eq!(find_free_rooms(&monday.labs, "8:00-10:50").unwrap(), vec!["Lab-2"]);
    assert!(matches!(
        find_free_rooms(&monday.labs, "8:00-9:20"),
        Err(TimetableError::InvalidTimeslot(_))
    ));
}

#[test]
fn test_match_timeslot_against_loaded_labels() {
    let dir = tempfile::tempdir().unwrap();
    support::write_day(dir.path(), "Monday");
    let week = WeekSnapshot::load(dir.path()).unwrap();

    let rooms = timeslots(&week, Weekday::Monday, RegionKind::Class).unwrap();
    assert_eq!(match_timeslot("12:15 PM", &rooms, RegionKind::Class).unwrap(), Some("11:00-1:30".to_string()));
    assert_eq!(match_timeslot("6:00 PM", &rooms, RegionKind::Class).unwrap(), None);
}

#[test]
fn test_list_subjects_sorted_and_unique() {
    let dir = tempfile::tempdir().unwrap();
    support::write_day(dir.path(), "Monday");
    support::write_day(dir.path(), "Tuesday");
    let week = WeekSnapshot::load(dir.path()).unwrap();

    assert_eq!(
        list_subjects(&week),
        vec!["Calculus", "Cancelled - OOP", "Networks Lab", "OOP", "OOP Lab", "Physics"]
    );
}

#[test]
fn test_missing_lab_marker_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    support::write_day(dir.path(), "Monday");
    let store = SnapshotStore::new(WeekSnapshot::load(dir.path()).unwrap());
    let before = store.current();

    write_sheet_values(dir.path(), "Tuesday", &support::day_values_without_lab_marker()).unwrap();
    let err = store.refresh(dir.path()).unwrap_err();
    assert!(matches!(err, TimetableError::MalformedSheet { .. }));
    assert_eq!(*store.current(), *before);
    assert_eq!(store.current().list_days(), vec!["Monday"]);
}

#[test]
fn test_purge_keeps_only_weekdays() {
    let dir = tempfile::tempdir().unwrap();
    support::write_day(dir.path(), "Monday");
    support::write_day(dir.path(), "Saturday");
    support::write_day(dir.path(), "Notes");
    std::fs::write(dir.path().join("readme.txt"), "not a sheet").unwrap();

    let removed = purge_non_weekday_files(dir.path()).unwrap();
    assert_eq!(removed, vec!["Notes.xlsx", "Saturday.xlsx"]);
    assert!(dir.path().join("Monday.xlsx").exists());
    assert!(dir.path().join("readme.txt").exists());
    assert!(!dir.path().join("Saturday.xlsx").exists());
}

#[test]
fn test_cells_are_compared_trimmed() {
    let dir = tempfile::tempdir().unwrap();
    let values: Vec<Vec<String>> = support::day_values()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|v| match v.as_str() {
                    "Lab" => " Lab ".to_string(),
                    "Calculus" => "Calculus  ".to_string(),
                    _ => v,
                })
                .collect()
        })
        .collect();
    write_sheet_values(dir.path(), "Monday", &values).unwrap();
    let week = WeekSnapshot::load(dir.path()).unwrap();

    assert_eq!(week.day(Weekday::Monday).unwrap().labs.table.rows.len(), 2);
    let entries = resolve(&subjects(&["Calculus"]), &week);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].room, "R5");
    assert!(list_subjects(&week).contains(&"Calculus".to_string()));
}
