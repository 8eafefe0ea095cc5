//! Interactive console loop around the dispatcher.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::warn;

use crate::dispatcher::Dispatcher;
use crate::types::{Priority, Task};

/// Menu choice that clears the screen; intentionally absent from the menu.
const CLEAR_SCREEN_CHOICE: u32 = 777;

const INVALID_OPTION_MSG: &str = "invalid option, enter a number between 1 and 4";

/// Drive the menu loop until the user quits or input ends.
///
/// All prompts and task output go to `out`; diagnostics go to the tracing
/// subscriber so they never interleave with the console surface.
pub fn run(
    dispatcher: &mut Dispatcher,
    input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    let mut lines = input.lines();
    loop {
        print_menu(&mut out)?;
        let Some(line) = lines.next().transpose()? else {
            // End of input: leave cleanly instead of spinning on the menu.
            return Ok(());
        };
        let Ok(choice) = line.trim().parse::<u32>() else {
            warn!(input = %line.trim(), "rejected non-numeric menu choice");
            writeln!(out, "{INVALID_OPTION_MSG}")?;
            continue;
        };
        match choice {
            1 => add_task(dispatcher, &mut lines, &mut out)?,
            2 => dispatch_one(dispatcher, &mut out)?,
            3 => show_pending(dispatcher, &mut out)?,
            4 => return Ok(()),
            CLEAR_SCREEN_CHOICE => {
                execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
            }
            other => {
                warn!(choice = other, "unknown menu choice");
                writeln!(out, "{INVALID_OPTION_MSG}")?;
            }
        }
    }
}

fn print_menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "options:")?;
    writeln!(out, "  1 -> add task")?;
    writeln!(out, "  2 -> dispatch next task")?;
    writeln!(out, "  3 -> show pending tasks")?;
    writeln!(out, "  4 -> quit")?;
    write!(out, "choose an option: ")?;
    out.flush()
}

/// Prompt for a description and a priority level, then submit.
///
/// Every rejection is reported and returns to the menu; no partial task is
/// ever inserted.
fn add_task(
    dispatcher: &mut Dispatcher,
    lines: &mut impl Iterator<Item = io::Result<String>>,
    out: &mut impl Write,
) -> io::Result<()> {
    write!(out, "task description: ")?;
    out.flush()?;
    let Some(description) = lines.next().transpose()? else {
        return Ok(());
    };

    write!(out, "priority (0 = normal, 1 = high): ")?;
    out.flush()?;
    let Some(level) = lines.next().transpose()? else {
        return Ok(());
    };
    let priority = match level.trim().parse::<u8>() {
        Ok(value) => match Priority::from_level(value) {
            Ok(priority) => priority,
            Err(err) => {
                warn!(level = value, "rejected priority level");
                writeln!(out, "{err}")?;
                return Ok(());
            }
        },
        Err(_) => {
            warn!(input = %level.trim(), "rejected non-numeric priority");
            writeln!(out, "priority must be 0 (normal) or 1 (high)")?;
            return Ok(());
        }
    };

    match dispatcher.submit(description.trim(), priority) {
        Ok(()) => writeln!(out, "task added ({priority})")?,
        Err(err) => {
            warn!(%err, "submit rejected");
            writeln!(out, "cannot add task: {err}")?;
        }
    }
    Ok(())
}

fn dispatch_one(dispatcher: &mut Dispatcher, out: &mut impl Write) -> io::Result<()> {
    match dispatcher.dispatch_next() {
        Some(task) => writeln!(
            out,
            "dispatching: {} (priority {})",
            task.description,
            task.priority.level()
        ),
        None => writeln!(out, "no pending tasks"),
    }
}

fn show_pending(dispatcher: &Dispatcher, out: &mut impl Write) -> io::Result<()> {
    let snapshot = dispatcher.inspect();
    if snapshot.is_empty() {
        return writeln!(out, "no tasks pending");
    }
    writeln!(out, "normal queue (next first):")?;
    print_tasks(&snapshot.queue, out)?;
    writeln!(out, "priority stack (next first):")?;
    print_tasks(&snapshot.stack, out)
}

fn print_tasks(tasks: &[Task], out: &mut impl Write) -> io::Result<()> {
    for task in tasks {
        writeln!(
            out,
            "  {} (priority {})",
            task.description,
            task.priority.level()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> String {
        let mut dispatcher = Dispatcher::new();
        let mut out = Vec::new();
        run(&mut dispatcher, Cursor::new(script), &mut out).expect("shell io failed");
        String::from_utf8(out).expect("shell output not utf-8")
    }

    #[test]
    fn session_dispatches_high_before_normal() {
        let out = run_session("1\nwater the plants\n0\n1\nput out the fire\n1\n2\n2\n2\n4\n");
        let fire = out
            .find("dispatching: put out the fire (priority 1)")
            .expect("high dispatch missing");
        let plants = out
            .find("dispatching: water the plants (priority 0)")
            .expect("normal dispatch missing");
        assert!(fire < plants, "high task must dispatch first");
        // Third dispatch finds both lanes empty.
        assert!(out.contains("no pending tasks"));
    }

    #[test]
    fn show_lists_queue_then_stack() {
        let out = run_session("1\nsweep the floor\n0\n1\nanswer the pager\n1\n3\n4\n");
        let queue_at = out.find("normal queue (next first):").expect("queue header");
        let stack_at = out
            .find("priority stack (next first):")
            .expect("stack header");
        assert!(queue_at < stack_at);
        assert!(out.contains("  sweep the floor (priority 0)"));
        assert!(out.contains("  answer the pager (priority 1)"));
    }

    #[test]
    fn show_on_empty_reports_no_tasks() {
        let out = run_session("3\n4\n");
        assert!(out.contains("no tasks pending"));
    }

    #[test]
    fn invalid_menu_choices_keep_the_session_alive() {
        let out = run_session("9\nabc\n4\n");
        assert_eq!(out.matches(INVALID_OPTION_MSG).count(), 2);
    }

    #[test]
    fn non_numeric_priority_is_rejected_without_insert() {
        let out = run_session("1\nfeed the cat\nhigh\n3\n4\n");
        assert!(out.contains("priority must be 0 (normal) or 1 (high)"));
        assert!(out.contains("no tasks pending"));
    }

    #[test]
    fn out_of_range_priority_is_rejected_without_insert() {
        let out = run_session("1\nfeed the cat\n2\n3\n4\n");
        assert!(out.contains("invalid priority level 2"));
        assert!(out.contains("no tasks pending"));
    }

    #[test]
    fn end_of_input_ends_the_session() {
        // No quit option in the script; the loop must still return.
        let out = run_session("1\nwrite minutes\n0\n");
        assert!(out.contains("task added"));
    }
}
