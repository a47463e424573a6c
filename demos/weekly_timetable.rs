//! Builds a small weekly timetable and prints it with the search diagnostics.
//!
//! Run with `RUST_LOG=debug` to follow the search.

use beeplan::model::{Course, DayOfWeek, Instructor, Room, RoomType, TimeSlot};
use beeplan::{PlanError, Scheduler};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let timeslots = vec![
        TimeSlot::parse(DayOfWeek::Mon, "09:00", "10:00")?,
        TimeSlot::parse(DayOfWeek::Mon, "10:00", "11:00")?,
        TimeSlot::parse(DayOfWeek::Mon, "11:00", "12:00")?,
        TimeSlot::parse(DayOfWeek::Wed, "10:00", "11:00")?,
        TimeSlot::parse(DayOfWeek::Fri, "13:00", "14:00")?,
        TimeSlot::parse(DayOfWeek::Fri, "14:00", "15:00")?,
        // First slot after the exam block
        TimeSlot::parse(DayOfWeek::Fri, "15:10", "16:10")?,
    ];

    let instructors = vec![
        Instructor::new("I1", "Dr. Ada", timeslots.clone()),
        Instructor::new("I2", "Dr. Turing", timeslots.clone()),
    ];

    let rooms = vec![
        Room::new("R1", "C101", 60, RoomType::Classroom),
        Room::new("R2", "C102", 60, RoomType::Classroom),
        Room::new("L1", "Lab A", 40, RoomType::Lab),
    ];

    let courses = vec![
        Course {
            id: "CENG201".to_string(),
            name: "Data Structures".to_string(),
            year: 2,
            department: "CENG".to_string(),
            is_elective: false,
            theory_hours_per_week: 3,
            lab_hours_per_week: 2,
            instructor_id: "I1".to_string(),
            enrolled_students: 38,
        },
        Course {
            id: "ELEC401".to_string(),
            name: "ML Elective".to_string(),
            year: 4,
            department: "CENG".to_string(),
            is_elective: true,
            theory_hours_per_week: 3,
            lab_hours_per_week: 0,
            instructor_id: "I2".to_string(),
            enrolled_students: 55,
        },
    ];

    let mut scheduler = Scheduler::default();
    match scheduler.generate_schedule(&courses, &instructors, &rooms, &timeslots) {
        Ok(schedule) => {
            println!("Weekly timetable ({} assignments)", schedule.len());
            println!("================================");
            for (day, entries) in schedule.by_day() {
                println!("{day}");
                for a in entries {
                    println!(
                        "  {:<6} {:<8} {}-{} in {}",
                        a.session.session_type.as_str(),
                        a.course_id(),
                        beeplan::model::format_clock(a.timeslot.start()),
                        beeplan::model::format_clock(a.timeslot.end()),
                        a.room_id
                    );
                }
            }
            println!();
            for room in &rooms {
                println!("{} booked for {:.1} h", room.name, schedule.room_hours(&room.id).value());
            }
        }
        Err(PlanError::Validation(e)) => {
            eprintln!("Input rejected: {e}");
            return Err(e.into());
        }
        Err(e) => eprintln!("Scheduling failed: {e}"),
    }

    let report = scheduler.report();
    println!();
    println!(
        "Run {}: {} nodes explored, {} rejections logged",
        report.run_id,
        report.nodes_explored,
        report.violations.len()
    );
    for (label, count) in report.hotspots().into_iter().take(5) {
        println!("  {label}: {count}");
    }
    Ok(())
}
