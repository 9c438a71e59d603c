use std::sync::Arc;

use chrono::NaiveDate;
use eyre::{eyre, Result, WrapErr};
use hospico_core::{
    booking::BookingForm,
    clock::{Clock, SystemClock},
    history::AppointmentHistory,
    models::{appointment::AppointmentRecord, patient::PatientDetails, time_slot::TimeSlot},
};
use tracing::info;

use crate::{
    api::ApiClient,
    booking::BookingService,
    config::ClientConfig,
    picker::{SelectionOutcome, SlotPicker},
    resolver::HttpBookedTimeResolver,
};

pub const USAGE: &str = "\
Usage:
  hospico slots <doctor-id> <YYYY-MM-DD>
  hospico book <clinic-id> <doctor-id> <YYYY-MM-DD> <HH:MM> <reason>...
  hospico appointments
  hospico cancel <appointment-id>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Slots {
        doctor_id: String,
        date: NaiveDate,
    },
    Book {
        clinic_id: String,
        doctor_id: String,
        date: NaiveDate,
        slot: String,
        reason: String,
    },
    Appointments,
    Cancel {
        appointment_id: String,
    },
    Help,
}

impl Command {
    /// Parses command-line arguments, excluding the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();

        match args.first().map(String::as_str) {
            Some("slots") => match &args[1..] {
                [doctor_id, date] => Ok(Command::Slots {
                    doctor_id: doctor_id.clone(),
                    date: parse_date(date)?,
                }),
                _ => Err(eyre!("slots takes a doctor id and a date\n\n{}", USAGE)),
            },
            Some("book") => match &args[1..] {
                [clinic_id, doctor_id, date, slot, reason @ ..] if !reason.is_empty() => {
                    Ok(Command::Book {
                        clinic_id: clinic_id.clone(),
                        doctor_id: doctor_id.clone(),
                        date: parse_date(date)?,
                        slot: slot.clone(),
                        reason: reason.join(" "),
                    })
                }
                _ => Err(eyre!(
                    "book takes a clinic id, doctor id, date, time and reason\n\n{}",
                    USAGE
                )),
            },
            Some("appointments") => match &args[1..] {
                [] => Ok(Command::Appointments),
                _ => Err(eyre!("appointments takes no arguments\n\n{}", USAGE)),
            },
            Some("cancel") => match &args[1..] {
                [appointment_id] => Ok(Command::Cancel {
                    appointment_id: appointment_id.clone(),
                }),
                _ => Err(eyre!("cancel takes an appointment id\n\n{}", USAGE)),
            },
            None | Some("help") | Some("--help") | Some("-h") => Ok(Command::Help),
            Some(other) => Err(eyre!("Unknown command '{}'\n\n{}", other, USAGE)),
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .wrap_err_with(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))
}

/// Runs `command` against the configured backend.
pub async fn run(config: ClientConfig, command: Command) -> Result<()> {
    run_with_clock(config, command, Arc::new(SystemClock)).await
}

pub async fn run_with_clock(
    config: ClientConfig,
    command: Command,
    clock: Arc<dyn Clock>,
) -> Result<()> {
    let api = ApiClient::new(config)?;
    let service = BookingService::new(api.clone());
    let picker = SlotPicker::new(Arc::new(HttpBookedTimeResolver::new(api)), clock.clone());

    match command {
        Command::Help => println!("{}", USAGE),
        Command::Slots { doctor_id, date } => {
            let slots = committed(picker.select(&doctor_id, date).await)?;
            if slots.is_empty() {
                println!("No available slots for this date");
            }
            for slot in slots {
                let state = if slot.is_booked { "booked" } else { "free" };
                println!("{}  {}", slot.time, state);
            }
        }
        Command::Book {
            clinic_id,
            doctor_id,
            date,
            slot,
            reason,
        } => {
            let slots = committed(picker.select(&doctor_id, date).await)?;
            picker.choose_slot(&slot)?;

            let profile = service
                .current_user()
                .await
                .wrap_err("Could not load your profile to fill in patient details")?;

            let form = BookingForm {
                user_id: profile.id.clone(),
                clinic_id,
                doctor_id,
                date: Some(date),
                slot: picker.selected_slot(),
                reason,
                patient: PatientDetails::from_profile(&profile),
            };
            let record = service.submit(&form, &slots).await?;
            info!("Booked appointment {:?}", record.id);
            println!("Appointment booked successfully for {} at {}", date, slot);
        }
        Command::Appointments => {
            let profile = service
                .current_user()
                .await
                .wrap_err("Could not load your profile")?;
            let user_id = profile
                .id
                .filter(|id| !id.is_empty())
                .ok_or_else(|| eyre!("Your profile has no user id"))?;

            let records = service
                .appointments_of(&user_id)
                .await
                .wrap_err("Failed to load appointments")?;
            let history = AppointmentHistory::from_records(records, clock.now());

            if history.is_empty() {
                println!("You have no appointments");
            }
            print_section("Upcoming", &history.upcoming);
            print_section("Past", &history.past);
        }
        Command::Cancel { appointment_id } => {
            service
                .cancel(&appointment_id)
                .await
                .wrap_err("Failed to cancel appointment")?;
            println!("Appointment {} cancelled", appointment_id);
        }
    }

    Ok(())
}

fn print_section(title: &str, records: &[AppointmentRecord]) {
    if records.is_empty() {
        return;
    }

    println!("{}:", title);
    for record in records {
        let doctor = record
            .doctor_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(record.doctor_id.as_deref())
            .unwrap_or("-");
        println!(
            "  {}  {}  {}  {}",
            record.id.as_deref().unwrap_or("-"),
            record.appointment_time.as_deref().unwrap_or("-"),
            doctor,
            record.status
        );
    }
}

fn committed(outcome: SelectionOutcome) -> Result<Vec<TimeSlot>> {
    match outcome {
        SelectionOutcome::Committed(slots) => Ok(slots),
        SelectionOutcome::Superseded => Err(eyre!("Slot lookup was superseded")),
    }
}
