use crate::helpers::*;
use widgets::WidgetRequest;

#[test]
fn test_foreground_after_explicit_indices() {
    let service = test_service();
    add_at(&service, &[1, 2, 3]);

    let top = service.add(square()).unwrap();

    assert_eq!(top.z, 4);
    assert_unique_z(&service);
}

#[test]
fn test_consecutive_foreground_adds_stack_upwards() {
    let service = test_service();
    let zs: Vec<i64> = (0..5).map(|_| service.add(square()).unwrap().z).collect();

    assert!(zs.windows(2).all(|pair| pair[1] == pair[0] + 1));
    assert_eq!(service.highest_z(), zs[4]);
}

#[test]
fn test_insert_into_gap_moves_nothing() {
    let service = test_service();
    let before = add_at(&service, &[1, 5]);

    let middle = service.add(square().with_z(3)).unwrap();

    assert_eq!(middle.z, 3);
    assert_eq!(z_of(&service, &before[0]), 1);
    assert_eq!(z_of(&service, &before[1]), 5);
    // Untouched widgets keep their timestamp.
    assert_eq!(
        service.get_by_id(&before[1].id).unwrap().last_modification_date,
        before[1].last_modification_date
    );
}

#[test]
fn test_insert_at_occupied_shifts_run_up_to_first_gap() {
    let service = test_service();
    let existing = add_at(&service, &[1, 2, 6]);

    let inserted = service.add(square().with_z(2)).unwrap();

    assert_eq!(inserted.z, 2);
    assert_eq!(z_of(&service, &existing[0]), 1);
    assert_eq!(z_of(&service, &existing[1]), 3);
    assert_eq!(z_of(&service, &existing[2]), 6);
    let zs: Vec<i64> = all_widgets(&service).iter().map(|w| w.z).collect();
    assert_eq!(zs, vec![1, 2, 3, 6]);
}

#[test]
fn test_long_run_shifts_in_full() {
    let service = test_service();
    let run = add_at(&service, &[10, 11, 12, 13, 14]);
    let beyond = add_at(&service, &[16]);

    service.add(square().with_z(10)).unwrap();

    for (offset, widget) in run.iter().enumerate() {
        assert_eq!(z_of(&service, widget), 11 + offset as i64);
    }
    assert_eq!(z_of(&service, &beyond[0]), 16);
    assert_unique_z(&service);
    assert_watermark_covers(&service);
}

#[test]
fn test_repeated_inserts_at_same_index() {
    let service = test_service();
    let inserted: Vec<_> = (0..4)
        .map(|_| service.add(square().with_z(0)).unwrap())
        .collect();

    // The most recent insert holds 0, earlier ones were pushed up one by one.
    for (age, widget) in inserted.iter().rev().enumerate() {
        assert_eq!(z_of(&service, widget), age as i64);
    }
    assert_unique_z(&service);
}

#[test]
fn test_negative_indices_are_ordinary() {
    let service = test_service();
    let existing = add_at(&service, &[-3, -2, 0]);

    service.add(square().with_z(-3)).unwrap();

    assert_eq!(z_of(&service, &existing[0]), -2);
    assert_eq!(z_of(&service, &existing[1]), -1);
    assert_eq!(z_of(&service, &existing[2]), 0);
    assert_unique_z(&service);
}

#[test]
fn test_update_replaces_geometry_without_shifting() {
    let service = test_service();
    let existing = add_at(&service, &[1, 2]);

    let updated = service
        .update_by_id(&existing[1].id, WidgetRequest::new(7, 8, 1.0, 2.0).with_z(1))
        .unwrap();

    assert_eq!(updated.id, existing[1].id);
    assert_eq!((updated.x, updated.y, updated.z), (7, 8, 1));
    assert_eq!(z_of(&service, &existing[0]), 1);
    assert!(updated.last_modification_date >= existing[1].last_modification_date);
}

#[test]
fn test_update_then_foreground_goes_above_new_height() {
    let service = test_service();
    let widget = service.add(square().with_z(0)).unwrap();
    service
        .update_by_id(&widget.id, square().with_z(100))
        .unwrap();

    assert_eq!(service.add(square()).unwrap().z, 101);
}

#[test]
fn test_delete_leaves_gap() {
    let service = test_service();
    let existing = add_at(&service, &[1, 2, 3]);

    service.delete_by_id(&existing[1].id).unwrap();
    // Inserting at the gap moves nothing.
    service.add(square().with_z(2)).unwrap();

    assert_eq!(z_of(&service, &existing[0]), 1);
    assert_eq!(z_of(&service, &existing[2]), 3);
    assert_eq!(service.count(), 3);
}

#[test]
fn test_missing_widget_errors() {
    let service = test_service();
    let gone = service.add(square()).unwrap();
    service.delete_by_id(&gone.id).unwrap();

    assert!(service.get_by_id(&gone.id).unwrap_err().is_not_found());
    assert!(service.update_by_id(&gone.id, square()).unwrap_err().is_not_found());
    assert!(service.delete_by_id(&gone.id).unwrap_err().is_not_found());
}

#[test]
fn test_z_exhaustion_is_reported_and_harmless() {
    let service = test_service();
    let top = service.add(square().with_z(i64::MAX)).unwrap();

    let err = service.add(square()).unwrap_err();
    assert!(err.is_z_index_exhausted());
    let err = service.add(square().with_z(i64::MAX)).unwrap_err();
    assert!(err.is_z_index_exhausted());

    assert_eq!(service.count(), 1);
    assert_eq!(z_of(&service, &top), i64::MAX);
    // Lower indices still work.
    assert_eq!(service.add(square().with_z(0)).unwrap().z, 0);
}
