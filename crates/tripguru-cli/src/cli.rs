//! Command handlers.
//!
//! Every command runs against one [`TripController`]: field flags are fed
//! through the form operations the way a user would type them, saves go
//! through `attempt_save_trip`, and the outcome is read back from the
//! controller's state and events.
//!
//! ```text
//! CLI flags → form operations → attempt_save_trip → TripEvent → renderer
//! ```

use anyhow::{anyhow, bail, Context, Result};
use jiff::tz::TimeZone;
use log::debug;
use tokio::sync::mpsc::UnboundedReceiver;
use tripguru_core::{
    display::parse_display_date, FormErrors, SaveAttempt, Trip, TripController, TripEvent,
    TripUseCases, Trips,
};

use crate::{
    args::{AddTripArgs, DeleteTripArgs, EditTripArgs, ShowTripArgs, TripFieldArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    use_cases: TripUseCases,
    controller: TripController,
    events: UnboundedReceiver<TripEvent>,
    renderer: TerminalRenderer,
    time_zone: TimeZone,
    json: bool,
}

impl Cli {
    pub fn new(use_cases: TripUseCases, renderer: TerminalRenderer, json: bool) -> Result<Self> {
        let time_zone = TimeZone::system();
        let controller = TripController::with_time_zone(use_cases.clone(), time_zone.clone());
        let events = controller
            .take_events()
            .ok_or_else(|| anyhow!("Trip events are already being observed"))?;

        Ok(Self {
            use_cases,
            controller,
            events,
            renderer,
            time_zone,
            json,
        })
    }

    pub async fn list_trips(&mut self) -> Result<()> {
        let mut trips = self.controller.trips();
        self.controller.load_trips();

        tokio::select! {
            changed = trips.changed() => {
                changed.context("Trip list closed before it was loaded")?;
            }
            event = self.events.recv() => match event {
                Some(TripEvent::ListFailed { message }) => bail!(message),
                other => bail!("Unexpected event while listing trips: {other:?}"),
            },
        }

        let trips = trips.borrow_and_update().clone();
        if self.json {
            println!("{}", serde_json::to_string_pretty(&trips)?);
        } else {
            self.renderer.show(&Trips(&trips));
        }
        Ok(())
    }

    pub async fn show_trip(&self, args: ShowTripArgs) -> Result<()> {
        let trip = self.fetch_trip(args.id).await?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&trip)?);
        } else {
            self.renderer.show(&trip);
        }
        Ok(())
    }

    pub async fn add_trip(&mut self, args: AddTripArgs) -> Result<()> {
        self.controller.clear_form_state();
        self.controller.on_name_changed(args.name);
        self.apply_fields(args.fields)?;
        self.save().await
    }

    pub async fn edit_trip(&mut self, args: EditTripArgs) -> Result<()> {
        let trip = self.fetch_trip(args.id).await?;
        self.controller.load_trip_for_editing(&trip);

        if let Some(name) = args.name {
            self.controller.on_name_changed(name);
        }
        if args.clear_start {
            self.controller.clear_start_date();
        }
        if args.clear_end {
            self.controller.clear_end_date();
        }
        self.apply_fields(args.fields)?;
        self.save().await
    }

    pub async fn delete_trip(&mut self, args: DeleteTripArgs) -> Result<()> {
        if !args.confirm {
            bail!("Deleting trip {} requires --confirm", args.id);
        }
        let trip = self.fetch_trip(args.id).await?;

        let mut trips = self.controller.trips();
        self.controller.load_trips();
        self.controller.delete_trip(&trip);

        loop {
            tokio::select! {
                changed = trips.changed() => {
                    changed.context("Trip list closed before the delete finished")?;
                    if !trips.borrow_and_update().iter().any(|t| t.id == trip.id) {
                        break;
                    }
                }
                event = self.events.recv() => match event {
                    Some(TripEvent::DeleteFailed { message } | TripEvent::ListFailed { message }) => {
                        bail!(message)
                    }
                    Some(other) => debug!("Ignoring event while deleting: {other:?}"),
                    None => bail!("Trip events closed before the delete finished"),
                },
            }
        }

        self.renderer
            .render(&format!("Deleted trip {}: {}\n", trip.id, trip.name));
        Ok(())
    }

    async fn fetch_trip(&self, id: u64) -> Result<Trip> {
        self.use_cases
            .get_trip_by_id
            .fetch(id)
            .await?
            .ok_or_else(|| anyhow!("Trip with ID {id} not found"))
    }

    /// Feeds the given flags into the form, leaving absent ones untouched.
    fn apply_fields(&self, fields: TripFieldArgs) -> Result<()> {
        let TripFieldArgs {
            destination,
            start,
            end,
            people,
            description,
        } = fields;

        if let Some(destination) = destination {
            self.controller.on_destination_changed(destination);
        }
        if let Some(start) = start {
            let date = parse_display_date("start date", &start, &self.time_zone)?;
            self.controller.on_start_date_selected(date);
        }
        if let Some(end) = end {
            let date = parse_display_date("end date", &end, &self.time_zone)?;
            self.controller.on_end_date_selected(date);
        }
        if let Some(people) = people {
            self.controller.on_number_of_people_changed(people);
        }
        if let Some(description) = description {
            self.controller.on_description_changed(description);
        }
        Ok(())
    }

    async fn save(&mut self) -> Result<()> {
        match self.controller.attempt_save_trip() {
            SaveAttempt::Started => {}
            SaveAttempt::Invalid => {
                let form = self.controller.form_state().borrow().clone();
                self.renderer.show(&FormErrors(&form));
                bail!("Trip was not saved");
            }
            SaveAttempt::AlreadySaving => bail!("A save is already in progress"),
        }

        loop {
            match self.events.recv().await {
                Some(event @ TripEvent::SaveSucceeded) => {
                    self.renderer.show(&event);
                    return Ok(());
                }
                Some(TripEvent::SaveFailed { message }) => bail!(message),
                Some(other) => debug!("Ignoring event while saving: {other:?}"),
                None => bail!("Trip events closed before the save finished"),
            }
        }
    }
}
