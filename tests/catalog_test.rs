//! Entity store integration tests: uniqueness, lookups and librarian
//! credentials.

mod common;

use biblioteca_server::{
    models::{
        book::CreateBook,
        genre::CreateGenre,
        librarian::CreateLibrarian,
        publisher::CreatePublisher,
        user::CreateMember,
    },
    AppError,
};
use common::{day, seed_book, seed_member, test_services};

#[tokio::test]
async fn duplicate_genre_name_is_rejected() {
    let services = test_services().await;

    services
        .catalog
        .create_genre(CreateGenre {
            name: "Fantasy".to_string(),
        })
        .await
        .unwrap();

    let err = services
        .catalog
        .create_genre(CreateGenre {
            name: "Fantasy".to_string(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UniquenessViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn duplicate_publisher_name_is_rejected() {
    let services = test_services().await;

    let publisher = CreatePublisher {
        name: "Aster House".to_string(),
        address: Some("3 Print Row".to_string()),
        phone_number: None,
    };
    services.catalog.create_publisher(publisher).await.unwrap();

    let err = services
        .catalog
        .create_publisher(CreatePublisher {
            name: "Aster House".to_string(),
            address: None,
            phone_number: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UniquenessViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn duplicate_isbn_is_rejected() {
    let services = test_services().await;
    seed_book(&services, "978-1-85723-000-1", 1).await;

    let err = services
        .catalog
        .create_book(CreateBook {
            isbn_number: "978-1-85723-000-1".to_string(),
            title: "Another Printing".to_string(),
            author: None,
            price: 250,
            genre_id: None,
            publisher_id: None,
            available_number: 4,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UniquenessViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn duplicate_username_is_rejected() {
    let services = test_services().await;
    seed_member(&services, "walter").await;

    let err = services
        .members
        .create(
            CreateMember {
                username: "walter".to_string(),
                email: "other@example.org".to_string(),
                address: "9 Mill Street".to_string(),
                phone_number: None,
            },
            day("2026-01-02"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::UniquenessViolation(_)), "got {:?}", err);
}

#[tokio::test]
async fn unknown_genre_reference_is_rejected() {
    let services = test_services().await;

    let err = services
        .catalog
        .create_book(CreateBook {
            isbn_number: "978-1-85723-000-1".to_string(),
            title: "Orphaned".to_string(),
            author: None,
            price: 250,
            genre_id: Some(999),
            publisher_id: None,
            available_number: 1,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn missing_book_lookup_is_not_found() {
    let services = test_services().await;

    let err = services
        .catalog
        .get_book("978-0-00-000000-0")
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)), "got {:?}", err);
}

#[tokio::test]
async fn author_defaults_to_folklore() {
    let services = test_services().await;

    let book = services
        .catalog
        .create_book(CreateBook {
            isbn_number: "978-1-85723-000-1".to_string(),
            title: "Collected Tales".to_string(),
            author: None,
            price: 180,
            genre_id: None,
            publisher_id: None,
            available_number: 2,
        })
        .await
        .unwrap();

    assert_eq!(book.author, "Folklore");
}

#[tokio::test]
async fn new_member_gets_a_sixty_day_window() {
    let services = test_services().await;

    let member = services
        .members
        .create(
            CreateMember {
                username: "walter".to_string(),
                email: "walter@example.org".to_string(),
                address: "12 Harbour Lane".to_string(),
                phone_number: Some(5551234),
            },
            day("2026-01-10"),
        )
        .await
        .unwrap();

    assert_eq!(member.date_created, day("2026-01-10"));
    assert_eq!(member.expiry_date, day("2026-03-11"));
    assert_eq!(member.fine, 0);
}

#[tokio::test]
async fn invalid_member_email_is_rejected() {
    let services = test_services().await;

    let err = services
        .members
        .create(
            CreateMember {
                username: "walter".to_string(),
                email: "not-an-email".to_string(),
                address: "12 Harbour Lane".to_string(),
                phone_number: None,
            },
            day("2026-01-10"),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
}

#[tokio::test]
async fn librarian_credentials_verify_round_trip() {
    let services = test_services().await;

    let created = services
        .librarians
        .create(CreateLibrarian {
            name: "Imogen".to_string(),
            email: "imogen@example.org".to_string(),
            password: "correct horse battery".to_string(),
            address: "1 Reading Room".to_string(),
            phone_number: None,
        })
        .await
        .unwrap();

    let verified = services
        .librarians
        .verify_credentials("imogen@example.org", "correct horse battery")
        .await
        .unwrap();
    assert_eq!(verified.id, created.id);

    let err = services
        .librarians
        .verify_credentials("imogen@example.org", "wrong password")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)), "got {:?}", err);

    // Unknown email reads the same as a bad password
    let err = services
        .librarians
        .verify_credentials("stranger@example.org", "whatever else")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unauthorized(_)), "got {:?}", err);
}

#[tokio::test]
async fn short_librarian_password_is_rejected() {
    let services = test_services().await;

    let err = services
        .librarians
        .create(CreateLibrarian {
            name: "Imogen".to_string(),
            email: "imogen@example.org".to_string(),
            password: "short".to_string(),
            address: "1 Reading Room".to_string(),
            phone_number: None,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)), "got {:?}", err);
}
