//! Explicit construction of the registry and the domain services.

use std::sync::Arc;

use cinelog_bus::{EventPublisher, EventRegistry, RegistryBuilder};
use cinelog_events::CinelogEvent;
use cinelog_events::{library, movies, rating, user, watchlist};
use cinelog_library::{InMemoryLibraryRepository, LibraryHandler, LibraryService};
use cinelog_movies::{InMemoryMovieCatalog, MovieHandler, MovieService};
use cinelog_rating::{InMemoryRatingRepository, RatingHandler, RatingService};
use cinelog_user::{InMemoryUserRepository, UserHandler, UserService};
use cinelog_watchlist::{InMemoryWatchlistRepository, WatchlistHandler, WatchlistService};

use crate::notifications::NotificationHandler;

/// Every domain service, sharing one publisher.
pub struct Services {
    pub users: UserService,
    pub movies: MovieService,
    pub library: LibraryService,
    pub ratings: RatingService,
    pub watchlist: WatchlistService,
}

/// Wire every topic to its decoder and handlers. Registration happens here
/// and nowhere else; the returned registry is immutable.
#[must_use]
pub fn build_registry() -> EventRegistry<CinelogEvent> {
    let user_handler = Arc::new(UserHandler::new());
    let movie_handler = Arc::new(MovieHandler::new());
    let library_handler = Arc::new(LibraryHandler::new());
    let rating_handler = Arc::new(RatingHandler::new());
    let watchlist_handler = Arc::new(WatchlistHandler::new());
    let notifications = Arc::new(NotificationHandler::new());

    let mut builder = RegistryBuilder::new();
    builder
        .register(user::USER_REGISTERED, user::decode_registered, user_handler.clone())
        .register(user::USER_UPDATED, user::decode_updated, user_handler.clone())
        .register(user::USER_DELETED, user::decode_deleted, user_handler)
        .register(movies::MOVIE_CREATED, movies::decode_created, movie_handler.clone())
        .register(movies::MOVIE_UPDATED, movies::decode_updated, movie_handler.clone())
        .register(movies::MOVIE_DELETED, movies::decode_deleted, movie_handler)
        .register(library::MOVIE_WATCHED, library::decode_watched, library_handler)
        .register(rating::MOVIE_RATED, rating::decode_rated, rating_handler.clone())
        .register(rating::MOVIE_UNRATED, rating::decode_unrated, rating_handler)
        .register(
            watchlist::MOVIE_ADDED_TO_WATCHLIST,
            watchlist::decode_added,
            watchlist_handler,
        );

    // Notifications ride along on the activity topics, after the owning
    // domain's handler.
    builder
        .subscribe(watchlist::MOVIE_ADDED_TO_WATCHLIST, notifications.clone())
        .subscribe(library::MOVIE_WATCHED, notifications.clone())
        .subscribe(rating::MOVIE_RATED, notifications.clone())
        .subscribe(rating::MOVIE_UNRATED, notifications);

    builder.build()
}

/// Build the domain services against in-memory stores.
#[must_use]
pub fn build_services(publisher: &EventPublisher<CinelogEvent>) -> Services {
    Services {
        users: UserService::new(Arc::new(InMemoryUserRepository::new()), publisher.clone()),
        movies: MovieService::new(Arc::new(InMemoryMovieCatalog::new()), publisher.clone()),
        library: LibraryService::new(
            Arc::new(InMemoryLibraryRepository::new()),
            publisher.clone(),
        ),
        ratings: RatingService::new(
            Arc::new(InMemoryRatingRepository::new()),
            publisher.clone(),
        ),
        watchlist: WatchlistService::new(
            Arc::new(InMemoryWatchlistRepository::new()),
            publisher.clone(),
        ),
    }
}
