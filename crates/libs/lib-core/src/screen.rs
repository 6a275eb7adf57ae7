//! # Screen State
//!
//! State owned by the mint screen: prompt text, current image, and the two
//! in-flight flags. Every change goes through a transition method so it can be
//! tested without rendering anything.
//!
//! ```text
//! generating:  idle ──start_generate──► in-flight ──complete_generate / fail_generate──► idle
//! minting:     idle ──start_mint──────► in-flight ──complete_mint / fail_mint──────────► idle
//! ```
//!
//! A `start_*` call while the matching flag is set is ignored, which is what keeps a
//! second click from launching a second operation.

use tracing::debug;

use crate::config::ImageSourceConfig;
use crate::model::{ImageReference, MintRequest, NftMetadata};
use crate::service::WalletSession;

/// Screen variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Fixed image; no prompt input
    Static(ImageReference),
    /// Image produced from the prompt
    Prompt,
}

impl From<ImageSourceConfig> for ImageSource {
    fn from(config: ImageSourceConfig) -> Self {
        match config {
            ImageSourceConfig::Static(image) => ImageSource::Static(image),
            ImageSourceConfig::Prompt => ImageSource::Prompt,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScreenState {
    source: ImageSource,
    /// Prompt text, edited directly by the input field
    pub prompt: String,
    image: Option<ImageReference>,
    generating: bool,
    minting: bool,
}

impl ScreenState {
    pub fn new(source: ImageSource) -> Self {
        let image = match &source {
            ImageSource::Static(image) => Some(image.clone()),
            ImageSource::Prompt => None,
        };
        Self { source, prompt: String::new(), image, generating: false, minting: false }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn image(&self) -> Option<&ImageReference> {
        self.image.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn is_minting(&self) -> bool {
        self.minting
    }

    // ----- generation -----

    /// Begin a generation, returning the trimmed prompt to send.
    ///
    /// Returns `None` and changes nothing on the static screen, for a blank prompt,
    /// or while a generation is already running.
    pub fn start_generate(&mut self) -> Option<String> {
        if !self.can_generate() {
            return None;
        }
        self.generating = true;
        debug!("generating -> true");
        Some(self.prompt.trim().to_string())
    }

    /// Store the generated image, replacing any previous one.
    pub fn complete_generate(&mut self, image: ImageReference) {
        self.image = Some(image);
        self.generating = false;
        debug!("generating -> false (ok)");
    }

    /// End a failed generation. The previous image, if any, stays.
    pub fn fail_generate(&mut self) {
        self.generating = false;
        debug!("generating -> false (failed)");
    }

    // ----- minting -----

    /// Begin a mint, returning the request to run.
    ///
    /// Returns `None` and changes nothing while a mint is running, when the wallet is
    /// disconnected, or when there is no image yet.
    pub fn start_mint(
        &mut self,
        wallet: &dyn WalletSession,
        metadata: &NftMetadata,
    ) -> Option<MintRequest> {
        if self.minting {
            return None;
        }
        let request = MintRequest::prepare(wallet, self.image.as_ref(), metadata)?;
        self.minting = true;
        debug!("minting -> true");
        Some(request)
    }

    pub fn complete_mint(&mut self) {
        self.minting = false;
        debug!("minting -> false (ok)");
    }

    pub fn fail_mint(&mut self) {
        self.minting = false;
        debug!("minting -> false (failed)");
    }

    // ----- rendering queries -----

    pub fn can_generate(&self) -> bool {
        self.shows_prompt() && !self.generating && !self.prompt.trim().is_empty()
    }

    pub fn can_mint(&self, wallet: &dyn WalletSession) -> bool {
        !self.minting && self.image.is_some() && wallet.is_connected()
    }

    /// Prompt input and Generate button are shown.
    pub fn shows_prompt(&self) -> bool {
        self.source == ImageSource::Prompt
    }

    /// Image preview and Mint button are shown.
    pub fn shows_mint(&self) -> bool {
        self.image.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeWallet;

    fn img(uri: &str) -> ImageReference {
        ImageReference::new(uri).unwrap()
    }

    fn prompt_screen(prompt: &str) -> ScreenState {
        let mut screen = ScreenState::new(ImageSource::Prompt);
        screen.prompt = prompt.to_string();
        screen
    }

    #[test]
    fn test_static_screen_starts_with_image() {
        let screen = ScreenState::new(ImageSource::Static(img("https://img/static.jpeg")));
        assert!(screen.shows_mint());
        assert!(!screen.shows_prompt());
        assert_eq!(screen.image().map(|i| i.as_str()), Some("https://img/static.jpeg"));
    }

    #[test]
    fn test_static_screen_never_generates() {
        let mut screen = ScreenState::new(ImageSource::Static(img("https://img/static.jpeg")));
        screen.prompt = "a red fox".to_string();
        assert_eq!(screen.start_generate(), None);
        assert!(!screen.is_generating());
    }

    #[test]
    fn test_blank_prompt_does_not_start() {
        let mut screen = prompt_screen("   ");
        assert!(!screen.can_generate());
        assert_eq!(screen.start_generate(), None);
        assert!(!screen.is_generating());
    }

    #[test]
    fn test_generate_cycle() {
        let mut screen = prompt_screen(" a red fox in snow ");
        assert!(!screen.shows_mint());

        assert_eq!(screen.start_generate().as_deref(), Some("a red fox in snow"));
        assert!(screen.is_generating());
        assert!(!screen.can_generate());

        // re-entrant click is ignored
        assert_eq!(screen.start_generate(), None);

        screen.complete_generate(img("https://img/1.png"));
        assert!(!screen.is_generating());
        assert!(screen.shows_mint());
        // prompt persists across generations
        assert_eq!(screen.prompt, " a red fox in snow ");
    }

    #[test]
    fn test_regeneration_replaces_image() {
        let mut screen = prompt_screen("fox");
        screen.start_generate();
        screen.complete_generate(img("https://img/1.png"));
        screen.start_generate();
        screen.complete_generate(img("https://img/2.png"));
        assert_eq!(screen.image().unwrap().as_str(), "https://img/2.png");
    }

    #[test]
    fn test_failed_generation_keeps_previous_image() {
        let mut screen = prompt_screen("fox");
        screen.start_generate();
        screen.complete_generate(img("https://img/1.png"));

        screen.start_generate();
        screen.fail_generate();

        assert!(!screen.is_generating());
        assert_eq!(screen.image().unwrap().as_str(), "https://img/1.png");
    }

    #[test]
    fn test_mint_gating() {
        let connected = FakeWallet::connected();
        let disconnected = FakeWallet::disconnected();
        let metadata = NftMetadata::default();

        // no image yet
        let mut screen = prompt_screen("fox");
        assert!(!screen.can_mint(&connected));
        assert!(screen.start_mint(&connected, &metadata).is_none());
        assert!(!screen.is_minting());

        screen.complete_generate(img("https://img/1.png"));

        // disconnected wallet
        assert!(!screen.can_mint(&disconnected));
        assert!(screen.start_mint(&disconnected, &metadata).is_none());
        assert!(!screen.is_minting());

        assert!(screen.can_mint(&connected));
        assert!(screen.start_mint(&connected, &metadata).is_some());
        assert!(screen.is_minting());
    }

    #[test]
    fn test_mint_reentrancy_and_reset() {
        let wallet = FakeWallet::connected();
        let metadata = NftMetadata::default();
        let mut screen = ScreenState::new(ImageSource::Static(img("https://img/static.jpeg")));

        assert!(screen.start_mint(&wallet, &metadata).is_some());
        assert!(screen.start_mint(&wallet, &metadata).is_none());
        assert!(!screen.can_mint(&wallet));

        screen.fail_mint();
        assert!(!screen.is_minting());
        assert_eq!(screen.image().unwrap().as_str(), "https://img/static.jpeg");

        assert!(screen.start_mint(&wallet, &metadata).is_some());
        screen.complete_mint();
        assert!(!screen.is_minting());
    }

    #[test]
    fn test_flags_are_independent() {
        let wallet = FakeWallet::connected();
        let mut screen = prompt_screen("fox");
        screen.complete_generate(img("https://img/1.png"));

        assert!(screen.start_mint(&wallet, &NftMetadata::default()).is_some());
        assert!(screen.start_generate().is_some());
        assert!(screen.is_minting() && screen.is_generating());
    }
}
