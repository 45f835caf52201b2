use std::env;
use std::error::Error;

use zen::corex::{Array, DynamicString};
use zen::sys::{self, TimeFormat};
use zen::terminal::{self, Answer, ConsoleInput, MessageType};
use zen::textfile::{CountItem, TextFile};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    terminal::println("[DynamicString]", MessageType::Information)?;

    let mut greeting = DynamicString::from("Hello");
    greeting += " World";
    println!("{greeting:?}");
    greeting.to_uppercase_in_place();
    greeting.reverse();
    println!("{greeting} (length {}, capacity {})", greeting.len(), greeting.capacity());

    let mut numbers: Array<i32> = Array::new();
    for n in [3, 1, 4, 1, 5] {
        numbers.add(n);
    }
    numbers.remove(&1)?;
    println!("{numbers:?}, ones left: {}", numbers.count(&1));

    terminal::println("[sys]", MessageType::Information)?;

    let info = sys::read_system_info()?;
    println!(
        "{} {} ({}) as {}@{}",
        info.name, info.kernel_release, info.architecture, info.username, info.host_name
    );
    println!("{:?}", sys::read_cpu_info()?);
    let memory = sys::read_memory_info()?;
    println!("memory: {} of {} bytes free", memory.free, memory.total);
    println!("{}", sys::time_date(TimeFormat::Both)?);

    terminal::println("[TextFile]", MessageType::Information)?;

    let notes = TextFile::new(env::temp_dir().join("zen-demo.txt"));
    notes.write("first line\n\nthird line\n", false)?;
    notes.write("last line\n", true)?;
    println!("{:?}", notes.read_all_lines()?);
    println!(
        "{} lines, {} empty, {} words, 'line' first at byte {:?}",
        notes.count(CountItem::Lines)?,
        notes.count(CountItem::EmptyLines)?,
        notes.count(CountItem::Words)?,
        notes.find("line", true, true)?,
    );
    notes.clear()?;

    terminal::println("[terminal]", MessageType::Information)?;

    let name = ConsoleInput::new().read("Name: ")?;
    let secret = ConsoleInput::new().with_password(true).read("Password: ")?;
    terminal::println(
        format!("Hello {name}, your password has {} characters", secret.len()),
        MessageType::Success,
    )?;

    match terminal::sure("Print a warning? [y/n] ", false)? {
        Answer::Yes => terminal::println("This is a warning", MessageType::Warning)?,
        Answer::No => terminal::println("No warning then", MessageType::Normal)?,
        Answer::Cancel => terminal::println("Cancelled", MessageType::Error)?,
    }

    let colors = ["red", "green", "blue"];
    if let Some(index) = terminal::ask("Favourite color", &colors, false)? {
        println!("You picked {}", colors[index]);
    }

    terminal::print_characters('=', 40, true)?;
    terminal::press_any_key(terminal::DEFAULT_ANY_KEY_MESSAGE)?;
    Ok(())
}
