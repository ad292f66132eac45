//! A map backend with no surface: every command is appended to a shared
//! [`Journal`]. Used for scripted sessions and for tests.

use super::{MapBackend, MapWidgetHandle, MarkerHandle};
use crate::{
    core::{
        config::{FlyTo, MapOptions, MarkerSpeed},
        geo::LatLng,
    },
    input::events::MapEventKind,
    MapError, Result,
};
use fxhash::FxHashSet;
use serde::Serialize;
use std::{cell::RefCell, rc::Rc};

/// A command issued against the headless backend
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum MapCommand {
    SetApiKey { api_key: String },
    CreateWidget { options: MapOptions },
    CreateMarker { position: LatLng },
    Listen { kind: MapEventKind },
    MoveMarker { position: LatLng, speed: MarkerSpeed },
    FlyTo { fly_to: FlyTo },
}

/// Shared, append-only command log
#[derive(Debug, Clone, Default)]
pub struct Journal {
    commands: Rc<RefCell<Vec<MapCommand>>>,
}

impl Journal {
    fn record(&self, command: MapCommand) {
        self.commands.borrow_mut().push(command);
    }

    pub fn commands(&self) -> Vec<MapCommand> {
        self.commands.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.commands.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.commands.borrow_mut().clear();
    }

    /// Targets of every marker move, oldest first
    pub fn marker_moves(&self) -> Vec<LatLng> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|command| match command {
                MapCommand::MoveMarker { position, .. } => Some(*position),
                _ => None,
            })
            .collect()
    }

    pub fn fly_tos(&self) -> Vec<FlyTo> {
        self.commands
            .borrow()
            .iter()
            .filter_map(|command| match command {
                MapCommand::FlyTo { fly_to } => Some(*fly_to),
                _ => None,
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&*self.commands.borrow())?)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessBackend {
    journal: Journal,
    fail_widget: bool,
    fail_marker: bool,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make widget creation fail
    pub fn fail_widget_creation(mut self) -> Self {
        self.fail_widget = true;
        self
    }

    /// Make marker creation fail
    pub fn fail_marker_creation(mut self) -> Self {
        self.fail_marker = true;
        self
    }

    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }
}

impl MapBackend for HeadlessBackend {
    type Widget = HeadlessWidget;
    type Marker = HeadlessMarker;

    fn set_api_key(&mut self, api_key: &str) {
        self.journal.record(MapCommand::SetApiKey {
            api_key: api_key.to_string(),
        });
    }

    fn create_widget(&mut self, options: &MapOptions) -> Result<HeadlessWidget> {
        if self.fail_widget {
            return Err(MapError::WidgetCreation(format!(
                "container '{}' unavailable",
                options.container
            )));
        }

        self.journal.record(MapCommand::CreateWidget {
            options: options.clone(),
        });
        Ok(HeadlessWidget {
            journal: self.journal.clone(),
            center: options.center,
            zoom: options.zoom,
            listening: FxHashSet::default(),
        })
    }

    fn create_marker(
        &mut self,
        position: LatLng,
        _widget: &mut HeadlessWidget,
    ) -> Result<HeadlessMarker> {
        if self.fail_marker {
            return Err(MapError::MarkerCreation("marker icon failed to load".into()));
        }

        self.journal.record(MapCommand::CreateMarker { position });
        Ok(HeadlessMarker {
            journal: self.journal.clone(),
            position,
        })
    }
}

/// Headless widget; fly-tos land instantly
#[derive(Debug)]
pub struct HeadlessWidget {
    journal: Journal,
    center: LatLng,
    zoom: f64,
    listening: FxHashSet<MapEventKind>,
}

impl HeadlessWidget {
    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }
}

impl MapWidgetHandle for HeadlessWidget {
    fn fly_to(&mut self, fly_to: &FlyTo) {
        self.center = fly_to.center;
        self.zoom = fly_to.zoom;
        self.journal.record(MapCommand::FlyTo { fly_to: *fly_to });
    }

    fn listen(&mut self, kind: MapEventKind) {
        if self.listening.insert(kind) {
            self.journal.record(MapCommand::Listen { kind });
        }
    }

    fn is_listening(&self, kind: MapEventKind) -> bool {
        self.listening.contains(&kind)
    }
}

#[derive(Debug)]
pub struct HeadlessMarker {
    journal: Journal,
    position: LatLng,
}

impl MarkerHandle for HeadlessMarker {
    fn move_to(&mut self, position: LatLng, speed: MarkerSpeed) {
        self.position = position;
        self.journal.record(MapCommand::MoveMarker { position, speed });
    }

    fn position(&self) -> LatLng {
        self.position
    }
}
