//! Menu loop dispatching console commands to the road-network store.

use crate::config::AppConfig;
use crate::console::Console;
use roadplan_core::render::{render_cities, render_full_report, render_road_matrix};
use roadplan_core::{Budget, Exporter, RoadNetwork};
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

const MENU: &str = "\nROADS-BUDGET-PLAN-CONSOLE-APPLICATION
--------------------------------------
1. Add new City(ies)
2. Add roads between cities
3. Add the budget for roads
4. Edit city
5. Search for a city using index
6. Display cities
7. Display roads
8. Display recorded data on console
9. Exit the application
Enter your choice: ";

const NO_CITIES: &str = "No cities recorded yet. Add cities first.";

/// Outcome of one command: keep going or end the session.
pub type Flow = ControlFlow<()>;

/// A numbered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddCities,
    AddRoad,
    SetBudget,
    EditCity,
    FindCity,
    ListCities,
    ShowRoads,
    ShowReport,
    Exit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, i64> {
        Ok(match value {
            1 => Self::AddCities,
            2 => Self::AddRoad,
            3 => Self::SetBudget,
            4 => Self::EditCity,
            5 => Self::FindCity,
            6 => Self::ListCities,
            7 => Self::ShowRoads,
            8 => Self::ShowReport,
            9 => Self::Exit,
            other => return Err(other),
        })
    }
}

/// An interactive session owning the store for its whole lifetime.
pub struct Session<R, W> {
    network: RoadNetwork,
    exporter: Exporter,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Start with an empty store.
    pub fn new(config: &AppConfig, input: R, output: W) -> Self {
        Self::with_network(RoadNetwork::new(), config, input, output)
    }

    /// Start from an existing store.
    pub fn with_network(network: RoadNetwork, config: &AppConfig, input: R, output: W) -> Self {
        Self {
            network,
            exporter: config.exporter(),
            console: Console::new(input, output),
        }
    }

    /// The store as it stands.
    pub fn network(&self) -> &RoadNetwork {
        &self.network
    }

    /// Finish the session, handing back the store and output stream.
    pub fn into_parts(self) -> (RoadNetwork, W) {
        (self.network, self.console.into_output())
    }

    /// Run the menu until choice 9 or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(line) = self.console.read_line(MENU)? else {
                tracing::debug!("Input ended at menu");
                break;
            };
            let choice = match line.trim().parse::<i64>() {
                Ok(n) => n,
                Err(_) => {
                    self.console.say("Invalid input. Please enter a number.")?;
                    continue;
                }
            };
            let Ok(choice) = MenuChoice::try_from(choice) else {
                self.console.say("Invalid choice. Please try again.")?;
                continue;
            };
            tracing::debug!("Menu choice {:?}", choice);
            if self.dispatch(choice)?.is_break() {
                break;
            }
        }
        self.console.say("Exiting application. Goodbye!")
    }

    /// Execute one menu command.
    pub fn dispatch(&mut self, choice: MenuChoice) -> io::Result<Flow> {
        match choice {
            MenuChoice::AddCities => self.add_cities(),
            MenuChoice::AddRoad => self.add_road(),
            MenuChoice::SetBudget => self.set_budget(),
            MenuChoice::EditCity => self.edit_city(),
            MenuChoice::FindCity => self.find_city(),
            MenuChoice::ListCities => self.show(render_cities(&self.network)),
            MenuChoice::ShowRoads => self.show(render_road_matrix(&self.network)),
            MenuChoice::ShowReport => self.show(render_full_report(&self.network)),
            MenuChoice::Exit => Ok(Flow::Break(())),
        }
    }

    fn add_cities(&mut self) -> io::Result<Flow> {
        let Some(count) = self.console.read_number::<usize, _>(
            "Enter the number of cities to add: ",
            "Invalid input. Please enter a positive number: ",
            |n| *n > 0,
        )?
        else {
            return Ok(Flow::Break(()));
        };

        let mut flow = Flow::Continue(());
        let mut added = 0;
        while added < count {
            let prompt = format!("Enter name of city {}: ", self.network.len() + 1);
            let Some(name) = self.console.read_line(&prompt)? else {
                flow = Flow::Break(());
                break;
            };
            match self.network.add_city(name.as_str()) {
                Ok(id) => {
                    self.console.say(format!("City '{}' added with index {}.", name, id))?;
                    added += 1;
                }
                Err(e) => {
                    tracing::debug!("Rejected city name {:?}: {}", name, e);
                    self.console.say(format!("{} Please enter a different name.", e))?;
                }
            }
        }

        self.save_cities()?;
        Ok(flow)
    }

    fn add_road(&mut self) -> io::Result<Flow> {
        let Some((from, to)) = self.read_pair()? else {
            return Ok(Flow::Break(()));
        };

        match self.network.add_road(&from, &to) {
            Ok(_) => self.console.say(format!("Road added between {} and {}.", from, to))?,
            Err(e) => self.console.say(format!("Error: {}", e))?,
        }

        self.save_roads()?;
        Ok(Flow::Continue(()))
    }

    fn set_budget(&mut self) -> io::Result<Flow> {
        let Some((from, to)) = self.read_pair()? else {
            return Ok(Flow::Break(()));
        };

        let mut flow = Flow::Continue(());
        match self.network.road_between(&from, &to) {
            Ok(_) => {
                let amount = self.console.read_number::<f64, _>(
                    "Enter the budget for the road (in Billion Frw): ",
                    "Invalid input. Please enter a non-negative number: ",
                    |amount| Budget::new(*amount).is_ok(),
                )?;
                match amount {
                    Some(amount) => match self.network.set_budget(&from, &to, amount) {
                        Ok(_) => self.console.say(format!(
                            "Budget added for the road between {} and {}.",
                            from, to
                        ))?,
                        Err(e) => self.console.say(format!("Error: {}", e))?,
                    },
                    None => flow = Flow::Break(()),
                }
            }
            Err(e) => self.console.say(format!("Error: {}", e))?,
        }

        self.save_roads()?;
        Ok(flow)
    }

    fn edit_city(&mut self) -> io::Result<Flow> {
        if self.network.is_empty() {
            self.console.say(NO_CITIES)?;
            return Ok(Flow::Continue(()));
        }
        let Some(index) = self.read_index("Enter the index for the city to edit: ")? else {
            return Ok(Flow::Break(()));
        };
        let prompt = format!("Enter the new name for City {}: ", index);
        let Some(new_name) = self.console.read_line(&prompt)? else {
            return Ok(Flow::Break(()));
        };

        match self.network.rename_city(index, new_name) {
            Ok(_) => self.console.say("City updated successfully.")?,
            Err(e) => self.console.say(format!("Error: {}", e))?,
        }

        self.save_cities()?;
        Ok(Flow::Continue(()))
    }

    fn find_city(&mut self) -> io::Result<Flow> {
        if self.network.is_empty() {
            self.console.say(NO_CITIES)?;
            return Ok(Flow::Continue(()));
        }
        let Some(index) = self.read_index("Enter the index of the city to search: ")? else {
            return Ok(Flow::Break(()));
        };

        match self.network.city_at(index) {
            Ok(name) => {
                let line = format!("City at index {}: {}", index, name);
                self.console.say(line)?;
            }
            Err(e) => self.console.say(format!("Error: {}", e))?,
        }
        Ok(Flow::Continue(()))
    }

    fn show(&mut self, text: String) -> io::Result<Flow> {
        self.console.write(text)?;
        Ok(Flow::Continue(()))
    }

    fn read_pair(&mut self) -> io::Result<Option<(String, String)>> {
        let Some(from) = self.console.read_line("Enter the name of the first City: ")? else {
            return Ok(None);
        };
        let Some(to) = self.console.read_line("Enter the name of the second City: ")? else {
            return Ok(None);
        };
        Ok(Some((from, to)))
    }

    fn read_index(&mut self, prompt: &str) -> io::Result<Option<usize>> {
        let count = self.network.len();
        let retry = format!("Invalid index. Please enter a number between 1 and {}: ", count);
        self.console
            .read_number::<usize, _>(prompt, &retry, |i| (1..=count).contains(i))
    }

    fn save_cities(&mut self) -> io::Result<()> {
        match self.exporter.write_cities(&self.network) {
            Ok(()) => self.console.say(format!(
                "Cities saved to {}.",
                self.exporter.cities_path().display()
            )),
            Err(e) => {
                report_export_failure(self.exporter.cities_path().display(), &e);
                Ok(())
            }
        }
    }

    fn save_roads(&mut self) -> io::Result<()> {
        match self.exporter.write_roads(&self.network) {
            Ok(()) => self.console.say(format!(
                "Roads and budgets saved to {}.",
                self.exporter.roads_path().display()
            )),
            Err(e) => {
                report_export_failure(self.exporter.roads_path().display(), &e);
                Ok(())
            }
        }
    }
}

fn report_export_failure(path: impl std::fmt::Display, err: &roadplan_core::Error) {
    tracing::error!("Export to {} failed: {}", path, err);
    eprintln!("Error: Could not open {} for writing.", path);
}
