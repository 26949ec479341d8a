/// What the media element has to do after a playback toggle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MediaCommand {
    Play,
    Pause,
}

/// Per-player UI state. Each player owns its own copy; nothing here
/// coordinates between players, so several videos may play at once.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PlaybackState {
    pub is_playing: bool,
    pub is_muted: bool,
    pub show_controls: bool,
    pub show_overlay: bool,
}

impl PlaybackState {
    pub fn new(starts_muted: bool) -> Self {
        Self {
            is_playing: false,
            is_muted: starts_muted,
            show_controls: false,
            show_overlay: true,
        }
    }

    /// The showreel is the only player that starts with sound.
    pub fn for_player(showreel: bool) -> Self {
        Self::new(!showreel)
    }

    pub fn toggle_playback(&mut self) -> MediaCommand {
        self.is_playing = !self.is_playing;
        self.show_overlay = !self.is_playing;
        self.media_command()
    }

    pub fn media_command(&self) -> MediaCommand {
        if self.is_playing {
            MediaCommand::Play
        } else {
            MediaCommand::Pause
        }
    }

    /// Returns the new muted flag so it can be mirrored onto the element.
    pub fn toggle_mute(&mut self) -> bool {
        self.is_muted = !self.is_muted;
        self.is_muted
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.show_controls = hovered;
    }

    /// Realigns with the element when it starts or stops on its own, e.g.
    /// from the browser's fullscreen controls.
    pub fn sync_from_media(&mut self, playing: bool) -> bool {
        if self.is_playing == playing {
            return false;
        }

        self.is_playing = playing;
        self.show_overlay = !playing;
        true
    }
}
