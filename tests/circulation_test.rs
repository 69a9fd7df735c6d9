//! Loan ledger integration tests over an in-memory store.

mod common;

use biblioteca_server::{models::item::ItemKind, AppError};
use common::{day, seed_book, seed_magazine, seed_member, test_services};

const ISBN: &str = "978-1-85723-000-1";
const ISSN: &str = "2049-3630";

#[tokio::test]
async fn issue_opens_a_record_and_takes_a_copy() {
    let services = test_services().await;
    let book = seed_book(&services, ISBN, 2).await;
    seed_member(&services, "walter").await;

    let record = services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, None, day("2026-03-05"))
        .await
        .unwrap();

    assert!(!record.returned);
    assert_eq!(record.book_id.as_deref(), Some(ISBN));
    assert_eq!(record.magazine_id, None);
    assert_eq!(record.genre_id, book.genre_id);
    assert_eq!(record.issued_date, day("2026-03-05"));
    // Default loan period is 15 days
    assert_eq!(record.expected_return_date, day("2026-03-20"));
    assert_eq!(record.returned_date, None);

    let book = services.catalog.get_book(ISBN).await.unwrap();
    assert_eq!(book.available_number, 1);
}

#[tokio::test]
async fn issue_unknown_isbn_is_not_found() {
    let services = test_services().await;
    seed_member(&services, "walter").await;

    let err = services
        .circulation
        .issue(ItemKind::Book, "walter", "978-0-00-000000-0", None, day("2026-03-05"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn issue_unknown_member_is_not_found() {
    let services = test_services().await;
    seed_book(&services, ISBN, 1).await;

    let err = services
        .circulation
        .issue(ItemKind::Book, "nobody", ISBN, None, day("2026-03-05"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn duplicate_issue_is_rejected() {
    let services = test_services().await;
    seed_book(&services, ISBN, 3).await;
    seed_member(&services, "walter").await;

    services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, None, day("2026-03-05"))
        .await
        .unwrap();

    let err = services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, None, day("2026-03-06"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateLoan(_)), "got {:?}", err);

    // The failed attempt must not touch the count
    let book = services.catalog.get_book(ISBN).await.unwrap();
    assert_eq!(book.available_number, 2);
}

#[tokio::test]
async fn issue_with_no_copies_left_is_out_of_stock() {
    let services = test_services().await;
    seed_book(&services, ISBN, 1).await;
    seed_member(&services, "walter").await;
    seed_member(&services, "dana").await;

    services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, None, day("2026-03-05"))
        .await
        .unwrap();

    let err = services
        .circulation
        .issue(ItemKind::Book, "dana", ISBN, None, day("2026-03-05"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::OutOfStock(_)), "got {:?}", err);

    let book = services.catalog.get_book(ISBN).await.unwrap();
    assert_eq!(book.available_number, 0);
}

#[tokio::test]
async fn duplicate_check_wins_over_out_of_stock() {
    let services = test_services().await;
    seed_book(&services, ISBN, 1).await;
    seed_member(&services, "walter").await;

    services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, None, day("2026-03-05"))
        .await
        .unwrap();

    // The member holds the last copy; the second attempt reports the
    // duplicate, not the empty shelf.
    let err = services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, None, day("2026-03-06"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateLoan(_)), "got {:?}", err);
}

#[tokio::test]
async fn return_without_open_loan_is_not_found() {
    let services = test_services().await;
    seed_book(&services, ISBN, 1).await;
    seed_member(&services, "walter").await;

    let err = services
        .circulation
        .return_item(ItemKind::Book, "walter", ISBN, day("2026-03-05"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn round_trip_restores_the_shelf() {
    let services = test_services().await;
    seed_book(&services, ISBN, 2).await;
    seed_member(&services, "walter").await;

    services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, None, day("2026-03-05"))
        .await
        .unwrap();

    let fine = services
        .circulation
        .return_item(ItemKind::Book, "walter", ISBN, day("2026-03-10"))
        .await
        .unwrap();
    assert_eq!(fine, 0);

    let book = services.catalog.get_book(ISBN).await.unwrap();
    assert_eq!(book.available_number, 2);

    let loans = services
        .circulation
        .member_loans("walter", day("2026-03-10"))
        .await
        .unwrap();
    assert!(loans.is_empty());

    // Exactly one record exists for the pair and it is closed
    let history = services.circulation.member_history("walter").await.unwrap();
    assert_eq!(history.len(), 1);
    assert!(history[0].returned);
    assert_eq!(history[0].returned_date, Some(day("2026-03-10")));

    // The pair has no open record left, so a second return has nothing
    // to close
    let err = services
        .circulation
        .return_item(ItemKind::Book, "walter", ISBN, day("2026-03-10"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);

    // And the item can be issued again
    services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, None, day("2026-03-11"))
        .await
        .unwrap();
}

#[tokio::test]
async fn return_within_grace_is_free() {
    let services = test_services().await;
    seed_book(&services, ISBN, 1).await;
    seed_member(&services, "walter").await;

    // Due on 2026-03-10
    services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, Some(5), day("2026-03-05"))
        .await
        .unwrap();

    let fine = services
        .circulation
        .return_item(ItemKind::Book, "walter", ISBN, day("2026-03-12"))
        .await
        .unwrap();
    assert_eq!(fine, 0);

    let member = services.members.get_by_username("walter").await.unwrap();
    assert_eq!(member.fine, 0);
}

#[tokio::test]
async fn late_return_charges_the_whole_overdue_span() {
    let services = test_services().await;
    seed_book(&services, ISBN, 1).await;
    seed_member(&services, "walter").await;

    // Due on 2026-03-10, returned ten days later
    services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, Some(5), day("2026-03-05"))
        .await
        .unwrap();

    let fine = services
        .circulation
        .return_item(ItemKind::Book, "walter", ISBN, day("2026-03-20"))
        .await
        .unwrap();
    assert_eq!(fine, 30);

    // The fee lands on the member's balance
    let member = services.members.get_by_username("walter").await.unwrap();
    assert_eq!(member.fine, 30);
}

#[tokio::test]
async fn concurrent_issues_on_the_last_copy() {
    let services = test_services().await;
    seed_book(&services, ISBN, 1).await;
    seed_member(&services, "walter").await;
    seed_member(&services, "dana").await;

    let (a, b) = tokio::join!(
        services
            .circulation
            .issue(ItemKind::Book, "walter", ISBN, None, day("2026-03-05")),
        services
            .circulation
            .issue(ItemKind::Book, "dana", ISBN, None, day("2026-03-05")),
    );

    let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one issuance may win: {:?} / {:?}", a, b);

    let loser = if a.is_err() { a } else { b };
    assert!(matches!(loser.unwrap_err(), AppError::OutOfStock(_)));

    let book = services.catalog.get_book(ISBN).await.unwrap();
    assert_eq!(book.available_number, 0);
}

#[tokio::test]
async fn member_loans_reflect_open_records_only() {
    let services = test_services().await;
    seed_book(&services, ISBN, 1).await;
    seed_magazine(&services, ISSN, 1).await;
    seed_member(&services, "walter").await;

    services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, Some(5), day("2026-03-01"))
        .await
        .unwrap();
    services
        .circulation
        .issue(ItemKind::Magazine, "walter", ISSN, Some(5), day("2026-03-02"))
        .await
        .unwrap();

    let loans = services
        .circulation
        .member_loans("walter", day("2026-03-03"))
        .await
        .unwrap();
    assert_eq!(loans.len(), 2);
    assert_eq!(loans[0].item_kind, "book");
    assert_eq!(loans[0].item_key, ISBN);
    assert!(!loans[0].is_overdue);
    assert_eq!(loans[1].item_kind, "magazine");
    assert_eq!(loans[1].item_key, ISSN);

    // Both due on 2026-03-06 / 2026-03-07; well past due they read overdue
    let loans = services
        .circulation
        .member_loans("walter", day("2026-03-20"))
        .await
        .unwrap();
    assert!(loans.iter().all(|l| l.is_overdue));

    services
        .circulation
        .return_item(ItemKind::Book, "walter", ISBN, day("2026-03-03"))
        .await
        .unwrap();

    let loans = services
        .circulation
        .member_loans("walter", day("2026-03-03"))
        .await
        .unwrap();
    assert_eq!(loans.len(), 1);
    assert_eq!(loans[0].item_kind, "magazine");
}

#[tokio::test]
async fn magazine_circulation_uses_the_same_ledger() {
    let services = test_services().await;
    seed_magazine(&services, ISSN, 1).await;
    seed_member(&services, "walter").await;

    let record = services
        .circulation
        .issue(ItemKind::Magazine, "walter", ISSN, None, day("2026-03-05"))
        .await
        .unwrap();
    assert_eq!(record.magazine_id.as_deref(), Some(ISSN));
    assert_eq!(record.book_id, None);

    let err = services
        .circulation
        .issue(ItemKind::Magazine, "walter", ISSN, None, day("2026-03-05"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DuplicateLoan(_)), "got {:?}", err);

    let fine = services
        .circulation
        .return_item(ItemKind::Magazine, "walter", ISSN, day("2026-03-06"))
        .await
        .unwrap();
    assert_eq!(fine, 0);

    let magazine = services.catalog.get_magazine(ISSN).await.unwrap();
    assert_eq!(magazine.available_number, 1);
}

#[tokio::test]
async fn zero_day_loan_period_is_rejected() {
    let services = test_services().await;
    seed_book(&services, ISBN, 1).await;
    seed_member(&services, "walter").await;

    let err = services
        .circulation
        .issue(ItemKind::Book, "walter", ISBN, Some(0), day("2026-03-05"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);

    let book = services.catalog.get_book(ISBN).await.unwrap();
    assert_eq!(book.available_number, 1);
}
