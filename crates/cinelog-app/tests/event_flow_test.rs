//! End-to-end flows through the real wiring: services publish onto the
//! in-memory broker, the supervisor consumes, handlers observe.

use std::sync::Arc;
use std::time::Duration;

use cinelog_app::{build_registry, build_services, demo};
use cinelog_bus::{
    Broker, BusError, ConsumerSupervisor, EventPublisher, EventRegistry, RegistryBuilder,
};
use cinelog_bus::InMemoryBroker;
use cinelog_events::CinelogEvent;
use cinelog_events::{library, movies, rating, user, watchlist};
use cinelog_movies::{Movie, NewMovie};
use cinelog_test_support::RecordingHandler;
use cinelog_watchlist::{InMemoryWatchlistRepository, WatchlistService};
use tokio::sync::oneshot;

async fn wait_until(condition: impl Fn() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "condition not reached within deadline"
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

fn spawn_supervisor(
    broker: &InMemoryBroker,
    registry: EventRegistry<CinelogEvent>,
) -> (
    oneshot::Sender<()>,
    tokio::task::JoinHandle<Result<(), BusError>>,
) {
    let supervisor = ConsumerSupervisor::new(Arc::new(broker.clone()), registry);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    let task = tokio::spawn(supervisor.run(async move {
        let _ = shutdown_rx.await;
    }));
    (shutdown_tx, task)
}

fn inception() -> Movie {
    Movie::from_new(NewMovie {
        title: "Inception".to_owned(),
        year: 2010,
        genre: vec!["Sci-Fi".to_owned()],
        director: vec!["Christopher Nolan".to_owned()],
        ..NewMovie::default()
    })
}

#[tokio::test]
async fn watchlist_addition_reaches_both_subscribed_handlers_exactly_once() {
    let broker = InMemoryBroker::new();
    let publisher: EventPublisher<CinelogEvent> = EventPublisher::new(broker.producer());

    // Same topology as the bootstrap wiring for this topic: the domain
    // handler first, the notification handler riding along.
    let domain_view = Arc::new(RecordingHandler::new(&[watchlist::MOVIE_ADDED_TO_WATCHLIST]));
    let notification_view =
        Arc::new(RecordingHandler::new(&[watchlist::MOVIE_ADDED_TO_WATCHLIST]));
    let mut builder = RegistryBuilder::new();
    builder.register(
        watchlist::MOVIE_ADDED_TO_WATCHLIST,
        watchlist::decode_added,
        domain_view.clone(),
    );
    builder.subscribe(watchlist::MOVIE_ADDED_TO_WATCHLIST, notification_view.clone());

    let service = WatchlistService::new(
        Arc::new(InMemoryWatchlistRepository::new()),
        publisher.clone(),
    );
    let mut movie = inception();
    movie.id = "m1".to_owned();
    service.add_movie("u1", &movie).await.unwrap();

    let (shutdown, task) = spawn_supervisor(&broker, builder.build());
    wait_until(|| domain_view.seen_count() == 1 && notification_view.seen_count() == 1).await;

    for view in [&domain_view, &notification_view] {
        let seen = view.seen();
        assert_eq!(seen.len(), 1);
        let CinelogEvent::MovieAddedToWatchlist(event) = &seen[0] else {
            panic!("wrong variant delivered");
        };
        assert_eq!(event.payload.user_id, "u1");
        assert_eq!(event.payload.movie_id, "m1");
        assert_eq!(event.payload.title, "Inception");
        assert_eq!(event.payload.genre, "Sci-Fi");
        assert_eq!(event.payload.year, 2010);
    }

    shutdown.send(()).unwrap();
    task.await.unwrap().unwrap();
}

#[tokio::test]
async fn events_on_unregistered_topics_are_retained_but_never_dispatched() {
    let broker = InMemoryBroker::new();
    let publisher: EventPublisher<CinelogEvent> = EventPublisher::new(broker.producer());

    // Only the watchlist topic is registered.
    let view = Arc::new(RecordingHandler::new(&[watchlist::MOVIE_ADDED_TO_WATCHLIST]));
    let mut builder = RegistryBuilder::new();
    builder.register(
        watchlist::MOVIE_ADDED_TO_WATCHLIST,
        watchlist::decode_added,
        view.clone(),
    );

    // A user event goes to a topic no loop consumes.
    publisher
        .publish(&user::UserRegistered::new("u1", "filmfan", "fan@films.dev").into())
        .await
        .unwrap();
    publisher
        .publish(
            &watchlist::MovieAddedToWatchlist::new("u1", "m1", "Inception", "Sci-Fi", 2010).into(),
        )
        .await
        .unwrap();

    let (shutdown, task) = spawn_supervisor(&broker, builder.build());
    wait_until(|| view.seen_count() == 1).await;

    // The user event sits in its log untouched.
    assert_eq!(broker.message_count(user::USER_REGISTERED), 1);

    shutdown.send(()).unwrap();
    task.await.unwrap().unwrap();
}

#[tokio::test]
async fn demo_flow_publishes_on_every_expected_topic() {
    let broker = InMemoryBroker::new();
    let publisher = EventPublisher::new(broker.producer());
    let services = build_services(&publisher);

    demo::run(&services).await.unwrap();

    // Two registrations plus the later profile update.
    assert_eq!(broker.message_count(user::USER_REGISTERED), 2);
    assert_eq!(broker.message_count(user::USER_UPDATED), 1);
    assert_eq!(broker.message_count(movies::MOVIE_CREATED), 2);
    assert_eq!(broker.message_count(watchlist::MOVIE_ADDED_TO_WATCHLIST), 2);
    assert_eq!(broker.message_count(library::MOVIE_WATCHED), 2);
    assert_eq!(broker.message_count(rating::MOVIE_RATED), 2);

    // The full registry drains everything the demo published.
    let (shutdown, task) = spawn_supervisor(&broker, build_registry());
    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.send(()).unwrap();
    task.await.unwrap().unwrap();
}

#[tokio::test]
async fn wire_payload_matches_contract() {
    let broker = InMemoryBroker::new();
    let publisher: EventPublisher<CinelogEvent> = EventPublisher::new(broker.producer());

    publisher
        .publish(
            &watchlist::MovieAddedToWatchlist::new("u1", "m1", "Inception", "Sci-Fi", 2010).into(),
        )
        .await
        .unwrap();

    let payloads = broker.payloads(watchlist::MOVIE_ADDED_TO_WATCHLIST);
    let value: serde_json::Value = serde_json::from_slice(&payloads[0]).unwrap();
    assert_eq!(value["user_id"], "u1");
    assert_eq!(value["movie_id"], "m1");
    assert_eq!(value["title"], "Inception");
    assert_eq!(value["genre"], "Sci-Fi");
    assert_eq!(value["year"], 2010);
}
