use std::sync::Arc;

use iced::{
    widget::{button, column, container, row, scrollable, text, text_input, Column, Row},
    Alignment, Application, Command, Element, Length,
};
use log::debug;
use shared::data::{CarField, CarRecord};

use crate::{
    client::{CarApi, Error},
    controller::{CarList, Refresh},
    forms::{AddCarForm, CarDraft, EditCarForm},
    grid::{GridColumn, COLUMNS, DELETE_PROMPT},
};

pub struct CarShop {
    cars: CarList,
    add_form: AddCarForm,
    edit_form: Option<EditCarForm>,
}

impl CarShop {
    /// Applies a message to the forms and the car list. Returns the refresh to run when the
    /// message sends a request.
    fn handle(&mut self, message: Message) -> Option<Refresh> {
        match message {
            Message::Refreshed(result) => self.cars.apply(result),
            Message::AddOpened => self.add_form.open(),
            Message::AddChanged(field, value) => self.add_form.edit(field, value),
            Message::AddCancelled => self.add_form.cancel(),
            Message::AddSubmitted => {
                let car = self.add_form.submit();
                return Some(self.cars.create(car));
            }
            Message::EditOpened(record) => self.edit_form = Some(EditCarForm::new(&record)),
            Message::EditChanged(field, value) => {
                if let Some(form) = &mut self.edit_form {
                    form.edit(field, value);
                }
            }
            Message::EditCancelled => self.edit_form = None,
            Message::EditSaved => {
                let (car, href) = self.edit_form.take()?.save();
                return Some(self.cars.update(car, href));
            }
            Message::DeletePressed(href) => {
                debug!("Asking before deleting {href}.");
                self.cars.request_delete(href);
            }
            Message::DeleteAnswered(accepted) => return self.cars.confirm_delete(accepted),
        };

        None
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Refreshed(Result<Vec<CarRecord>, Error>),
    AddOpened,
    AddChanged(CarField, String),
    AddCancelled,
    AddSubmitted,
    EditOpened(CarRecord),
    EditChanged(CarField, String),
    EditCancelled,
    EditSaved,
    DeletePressed(String),
    DeleteAnswered(bool),
}

impl Application for CarShop {
    type Message = Message;
    type Executor = iced::executor::Default;
    type Theme = iced::Theme;
    type Flags = Arc<dyn CarApi>;

    fn new(api: Self::Flags) -> (Self, Command<Message>) {
        let cars = CarList::new(api);
        let fetch = cars.fetch_all();

        (
            CarShop {
                cars,
                add_form: AddCarForm::default(),
                edit_form: None,
            },
            Command::perform(fetch, Message::Refreshed),
        )
    }

    fn title(&self) -> String {
        "Car shop".to_string()
    }

    fn theme(&self) -> iced::Theme {
        iced::Theme::Dark
    }

    fn update(&mut self, message: Message) -> Command<Message> {
        match self.handle(message) {
            Some(refresh) => Command::perform(refresh, Message::Refreshed),
            None => Command::none(),
        }
    }

    fn view(&self) -> Element<Message> {
        let title = text("Car shop").size(28);

        let mut content = column![title].spacing(10);

        if let Some(href) = self.cars.pending_delete() {
            content = content.push(delete_prompt(href));
        }

        if self.add_form.is_open() {
            content = content.push(car_form(
                "New car",
                self.add_form.draft(),
                Message::AddChanged,
                Message::AddSubmitted,
                Message::AddCancelled,
            ));
        } else {
            content = content.push(button("Add car").on_press(Message::AddOpened));
        }

        if let Some(form) = &self.edit_form {
            content = content.push(car_form(
                "Edit car",
                form.draft(),
                Message::EditChanged,
                Message::EditSaved,
                Message::EditCancelled,
            ));
        }

        content = content.push(grid(self.cars.cars()));

        container(content)
            .padding(10)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn delete_prompt(href: &str) -> Element<'_, Message> {
    row![
        text(DELETE_PROMPT),
        text(href).size(14),
        button("Yes").on_press(Message::DeleteAnswered(true)),
        button("No").on_press(Message::DeleteAnswered(false)),
    ]
    .spacing(10)
    .align_items(Alignment::Center)
    .into()
}

fn car_form<'a>(
    heading: &str,
    draft: &CarDraft,
    on_change: fn(CarField, String) -> Message,
    on_save: Message,
    on_cancel: Message,
) -> Element<'a, Message> {
    let fields = CarField::ALL.iter().fold(Row::new().spacing(5), |fields, &field| {
        fields.push(
            text_input(field.header(), draft.get(field))
                .on_input(move |value| on_change(field, value))
                .width(Length::FillPortion(1)),
        )
    });

    column![
        text(heading).size(20),
        fields,
        row![
            button("Save").on_press(on_save),
            button("Cancel").on_press(on_cancel),
        ]
        .spacing(5),
    ]
    .spacing(5)
    .into()
}

fn grid(cars: &[CarRecord]) -> Element<'_, Message> {
    let header = COLUMNS.iter().fold(Row::new().spacing(10), |header, column| {
        header.push(text(column.header()).width(Length::FillPortion(1)))
    });

    let rows: Vec<Element<Message>> = cars
        .iter()
        .map(|record| -> Element<Message> {
            COLUMNS
                .iter()
                .fold(Row::new().spacing(10).align_items(Alignment::Center), |row, &column| {
                    let cell: Element<Message> = match column {
                        GridColumn::Field(_) => text(column.cell(record)).into(),
                        GridColumn::Edit => button(text(column.cell(record)))
                            .on_press(Message::EditOpened(record.clone()))
                            .into(),
                        GridColumn::Delete => button(text(column.cell(record)))
                            .on_press(Message::DeletePressed(record.href().to_owned()))
                            .into(),
                    };
                    row.push(container(cell).width(Length::FillPortion(1)))
                })
                .into()
        })
        .collect();

    column![header, scrollable(Column::with_children(rows).spacing(5))]
        .spacing(10)
        .into()
}
