use wondermap::prelude::*;

/// Integration tests driving the whole application over the headless backend,
/// the way a host feeds it selections and map clicks.
#[cfg(test)]
mod integration_tests {
    use super::*;
    use wondermap::{
        backend::{Journal, MapCommand},
        landmarks,
    };

    const COLOSSEUM: LatLng = LatLng::new(41.8902141, 12.4877462);

    /// Helper to build a mounted app and hand back its command journal
    fn mounted_app(backend: HeadlessBackend) -> (WonderApp<HeadlessBackend>, Journal) {
        let journal = backend.journal();
        let config = AppConfig {
            api_key: Some("integration".into()),
            ..AppConfig::default()
        };
        let mut app = WonderApp::new(backend, config);
        app.mount().expect("mount");
        journal.clear();
        (app, journal)
    }

    fn click(lat: f64, lng: f64) -> AppEvent {
        AppEvent::Map(MapEvent::Click {
            lat_lng: LatLng::new(lat, lng),
            pixel: Point::new(0.0, 0.0),
        })
    }

    #[test]
    fn test_every_landmark_flies_to_its_coordinate() {
        let (mut app, journal) = mounted_app(HeadlessBackend::new());

        for landmark in SelectionController::options() {
            journal.clear();
            app.select(landmark.id);

            assert_eq!(app.coordinate(), landmark.coordinate, "{}", landmark.id);
            assert_eq!(journal.marker_moves(), vec![landmark.coordinate]);
            assert_eq!(journal.fly_tos()[0].center, landmark.coordinate);
        }
    }

    #[test]
    fn test_unknown_selection_goes_to_default() {
        let (mut app, _) = mounted_app(HeadlessBackend::new());

        app.select("colosseum");
        app.select("");
        assert_eq!(app.coordinate(), DEFAULT_COORDINATE);

        app.select("not-a-wonder");
        assert_eq!(app.coordinate(), LatLng::new(27.1773531, 78.0116069));
    }

    #[test]
    fn test_select_colosseum() {
        let (mut app, _) = mounted_app(HeadlessBackend::new());

        app.dispatch(AppEvent::Select("colosseum".into()));

        assert_eq!(app.selected(), Some("colosseum"));
        assert_eq!(app.coordinate(), COLOSSEUM);
        assert_eq!(app.widget().map(|w| w.center()), Some(COLOSSEUM));
    }

    #[test]
    fn test_click_moves_marker_then_state_change_flies() {
        let (mut app, journal) = mounted_app(HeadlessBackend::new());

        app.dispatch(click(10.0, 20.0));

        let target = LatLng::new(10.0, 20.0);
        assert_eq!(app.coordinate(), target);

        // One move from the click itself, one from the state change
        let commands = journal.commands();
        assert_eq!(commands.len(), 3);
        assert_eq!(
            commands[0],
            MapCommand::MoveMarker {
                position: target,
                speed: MarkerSpeed::MAX
            }
        );
        assert_eq!(journal.marker_moves(), vec![target, target]);

        let fly = journal.fly_tos();
        assert_eq!(fly.len(), 1);
        assert_eq!(fly[0], CameraOptions::default().fly_to(target));
        assert!(matches!(commands[2], MapCommand::FlyTo { .. }));
    }

    #[test]
    fn test_repeated_selection_is_not_deduplicated() {
        let (mut app, journal) = mounted_app(HeadlessBackend::new());

        app.select("machu-picchu");
        let first = app.coordinate();
        app.select("machu-picchu");
        let second = app.coordinate();

        assert_eq!(first, second);
        let moves = journal.marker_moves();
        let flights = journal.fly_tos();
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0], moves[1]);
        assert_eq!(flights.len(), 2);
        assert_eq!(flights[0], flights[1]);
    }

    #[test]
    fn test_marker_failure_leaves_selection_working() {
        let (mut app, journal) = mounted_app(HeadlessBackend::new().fail_marker_creation());
        assert_eq!(app.adapter().phase(), AdapterPhase::WidgetReady);

        app.select("great-wall");
        app.dispatch(click(1.0, 1.0));
        app.select("petra");

        assert!(journal.is_empty());
        assert_eq!(app.coordinate(), landmarks::coordinate_for(Some("petra")));
    }

    #[test]
    fn test_widget_failure_is_returned_from_mount() {
        let mut app = WonderApp::new(
            HeadlessBackend::new().fail_widget_creation(),
            AppConfig::default(),
        );

        let err = app.mount().unwrap_err();
        assert!(matches!(err, MapError::WidgetCreation(_)));
        assert!(app.widget().is_none());

        // Selections still resolve even without a map
        app.select("petra");
        assert_eq!(app.coordinate(), landmarks::coordinate_for(Some("petra")));
    }

    #[test]
    fn test_startup_sequence() {
        let backend = HeadlessBackend::new();
        let journal = backend.journal();
        let mut app = WonderApp::new(backend, AppConfig::default());
        app.mount().unwrap();

        let commands = journal.commands();
        let kinds: Vec<&str> = commands
            .iter()
            .map(|c| match c {
                MapCommand::SetApiKey { .. } => "set_api_key",
                MapCommand::CreateWidget { .. } => "create_widget",
                MapCommand::CreateMarker { .. } => "create_marker",
                MapCommand::Listen { .. } => "listen",
                MapCommand::MoveMarker { .. } => "move_marker",
                MapCommand::FlyTo { .. } => "fly_to",
            })
            .collect();
        assert_eq!(
            kinds,
            [
                "set_api_key",
                "create_widget",
                "create_marker",
                "listen",
                "move_marker",
                "fly_to"
            ]
        );

        // Mounting again must not register a second listener
        app.mount().unwrap();
        assert_eq!(journal.len(), commands.len());
        assert_eq!(journal.fly_tos().len(), 1);
    }

    #[test]
    fn test_mount_after_selection_is_a_no_op() {
        let (mut app, journal) = mounted_app(HeadlessBackend::new());
        app.select("petra");
        let petra = landmarks::coordinate_for(Some("petra"));
        assert_eq!(journal.marker_moves(), vec![petra]);
        let before = journal.len();

        app.mount().unwrap();

        assert_eq!(journal.len(), before);
        assert_eq!(journal.fly_tos().len(), 1);
        assert_eq!(app.coordinate(), petra);
        assert_eq!(app.selected(), Some("petra"));
    }

    #[test]
    fn test_journal_round_trips_through_json() {
        let (mut app, journal) = mounted_app(HeadlessBackend::new());
        app.select("chichen-itza");

        let json = journal.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let commands = value.as_array().unwrap();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0]["command"], "move_marker");
        assert_eq!(commands[0]["speed"], 10);
        assert_eq!(commands[1]["fly_to"]["zoom"], 14.0);
    }
}
