use std::sync::Arc;

use iced::widget::{button, column, container, row, slider, text, text_input};
use iced::{Element, Task, Theme};
use noblue_core::{
    CHANNEL_MAX, CHANNEL_MIN, Channel, GammaBackend, Preset, SettingsPanel, XrandrBackend,
};

pub fn main() -> iced::Result {
    env_logger::init();

    iced::application(NoBlueApp::default, NoBlueApp::update, NoBlueApp::view)
        .title("NoBlueApp - Blue Light Filter")
        .window_size((500.0, 600.0))
        .theme(NoBlueApp::theme)
        .run()
}

struct NoBlueApp {
    backend: Option<Arc<XrandrBackend>>,
    panel: SettingsPanel,
    error_message: Option<String>,
}

#[derive(Debug, Clone)]
enum Message {
    // Sliders
    SliderChanged(Channel, f64),

    // Entry boxes
    EntryEdited(Channel, String),
    EntrySubmitted(Channel),

    // Buttons
    PresetSelected(Preset),
    Revert,
}

impl Default for NoBlueApp {
    fn default() -> Self {
        let mut app = Self {
            backend: None,
            panel: SettingsPanel::new(),
            error_message: None,
        };

        // Resolve the connected output; without one the window stays inert
        match XrandrBackend::new() {
            Ok(backend) => {
                let backend = Arc::new(backend);

                // Push the launch defaults so the display matches the controls
                if let Err(e) = backend.apply(app.panel.settings()) {
                    app.error_message = Some(format!("Apply error: {e}"));
                }

                app.backend = Some(backend);
            }
            Err(e) => {
                eprintln!("Error: {e}");
            }
        }

        app
    }
}

impl NoBlueApp {
    fn update(&mut self, message: Message) -> Task<Message> {
        // Clear previous errors on new actions
        self.error_message = None;

        let Some(backend) = self.backend.clone() else {
            return Task::none();
        };

        let result = match message {
            Message::SliderChanged(channel, value) => {
                self.panel.slider_changed(channel, value, backend.as_ref())
            }

            Message::EntryEdited(channel, value) => {
                self.panel.edit_entry(channel, value);
                Ok(())
            }

            Message::EntrySubmitted(channel) => {
                self.panel.entry_confirmed(channel, backend.as_ref())
            }

            Message::PresetSelected(preset) => self.panel.set_preset(preset, backend.as_ref()),

            Message::Revert => self.panel.revert(backend.as_ref()),
        };

        if let Err(e) = result {
            self.error_message = Some(format!("{e}"));
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        let title = text("NoBlueApp").size(24);

        if self.backend.is_none() {
            let content = column![title, text("No connected display found.").size(16)]
                .spacing(15)
                .padding(20);
            return container(content).into();
        }

        // Error/status message
        let status = if let Some(ref msg) = self.error_message {
            text(msg).size(14)
        } else {
            text("").size(14)
        };

        let channels = column(Channel::ALL.map(|channel| channel_section(&self.panel, channel)))
            .spacing(15);

        let presets = row(Preset::ALL.map(|preset| {
            button(text(preset.label()).size(14))
                .on_press(Message::PresetSelected(preset))
                .into()
        }))
        .spacing(10);

        let revert = button("Revert to Defaults").on_press(Message::Revert);

        let content = column![
            title,
            text("Adjust the gamma values and brightness").size(14),
            status,
            channels,
            presets,
            revert,
        ]
        .spacing(15)
        .padding(20);

        container(content).into()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn channel_section(panel: &SettingsPanel, channel: Channel) -> Element<'_, Message> {
    column![
        text(channel.label()).size(16),
        text_input("0.00", panel.entry_text(channel))
            .on_input(move |value| Message::EntryEdited(channel, value))
            .on_submit(Message::EntrySubmitted(channel))
            .width(100),
        slider(CHANNEL_MIN..=CHANNEL_MAX, panel.value(channel), move |value| {
            Message::SliderChanged(channel, value)
        })
        .step(0.01),
    ]
    .spacing(5)
    .into()
}
