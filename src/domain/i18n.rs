//! Static localization catalog.
//!
//! All user-facing texts live here, keyed by [`MessageKey`]. Lookup in
//! a language whose dictionary misses a key falls back to the English
//! entry. The language is an explicit value handed to the view layer,
//! never ambient state.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    En,
    Ru,
    He,
}

/// Text direction for rendering; Hebrew is right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

impl Language {
    pub fn direction(self) -> TextDirection {
        match self {
            Language::He => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// Parse a BCP 47-ish tag, ignoring any region subtag
    /// (`ru-RU` selects Russian). Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.split('-').next().unwrap_or_default() {
            "en" => Some(Language::En),
            "ru" => Some(Language::Ru),
            "he" => Some(Language::He),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    AdminPanelTitle,
    CloudHostingTip,
    UploadVideo,
    VideoName,
    SelectFile,
    Uploading,
    Upload,
    ManageVideos,
    Status,
    Actions,
    Active,
    Inactive,
    GetQrCode,
    ScanQrCode,
    VideoLink,
    Close,
    PlayerLoading,
    PlayerNotFound,
    TapToPlay,
    Language,
}

/// Resolve `key` in `language`, falling back to English.
pub fn translate(language: Language, key: MessageKey) -> &'static str {
    lookup(language, key).unwrap_or_else(|| lookup(Language::En, key).unwrap_or(""))
}

fn lookup(language: Language, key: MessageKey) -> Option<&'static str> {
    use MessageKey as K;
    match language {
        Language::En => Some(match key {
            K::AdminPanelTitle => "Admin Panel - Video Management",
            K::CloudHostingTip => {
                "Tip: For video hosting, consider services like Cloudinary or Mux. \
                 They have generous free plans for developers."
            }
            K::UploadVideo => "Upload New Video",
            K::VideoName => "Video Name",
            K::SelectFile => "Select a video file",
            K::Uploading => "Uploading...",
            K::Upload => "Upload",
            K::ManageVideos => "Manage Videos",
            K::Status => "Status",
            K::Actions => "Actions",
            K::Active => "Active",
            K::Inactive => "Inactive",
            K::GetQrCode => "Get QR Code",
            K::ScanQrCode => "Scan this QR code on a mobile device",
            K::VideoLink => "Video Link:",
            K::Close => "Close",
            K::PlayerLoading => "Loading video...",
            K::PlayerNotFound => "Video not found or is inactive.",
            K::TapToPlay => "Tap to Play",
            K::Language => "Language",
        }),
        Language::Ru => Some(match key {
            K::AdminPanelTitle => "Админ-панель - Управление видео",
            K::CloudHostingTip => {
                "Совет: Для видеохостинга рассмотрите сервисы, такие как Cloudinary или Mux. \
                 У них есть щедрые бесплатные тарифы для разработчиков."
            }
            K::UploadVideo => "Загрузить новое видео",
            K::VideoName => "Название видео",
            K::SelectFile => "Выберите видеофайл",
            K::Uploading => "Загрузка...",
            K::Upload => "Загрузить",
            K::ManageVideos => "Управление видео",
            K::Status => "Статус",
            K::Actions => "Действия",
            K::Active => "Активно",
            K::Inactive => "Неактивно",
            K::GetQrCode => "Получить QR-код",
            K::ScanQrCode => "Отсканируйте этот QR-код на мобильном устройстве",
            K::VideoLink => "Ссылка на видео:",
            K::Close => "Закрыть",
            K::PlayerLoading => "Загрузка видео...",
            K::PlayerNotFound => "Видео не найдено или неактивно.",
            K::TapToPlay => "Нажмите для воспроизведения",
            K::Language => "Язык",
        }),
        Language::He => Some(match key {
            K::AdminPanelTitle => "פאנל ניהול - ניהול וידאו",
            K::CloudHostingTip => {
                "טיפ: לאירוח וידאו, שקול שירותים כמו Cloudinary או Mux. \
                 יש להם תוכניות חינמיות נדיבות למפתחים."
            }
            K::UploadVideo => "העלאת וידאו חדש",
            K::VideoName => "שם הוידאו",
            K::SelectFile => "בחר קובץ וידאו",
            K::Uploading => "מעלה...",
            K::Upload => "העלאה",
            K::ManageVideos => "ניהול וידאו",
            K::Status => "סטטוס",
            K::Actions => "פעולות",
            K::Active => "פעיל",
            K::Inactive => "לא פעיל",
            K::GetQrCode => "קבל קוד QR",
            K::ScanQrCode => "סרוק את קוד ה-QR הזה במכשיר נייד",
            K::VideoLink => "קישור לוידאו:",
            K::Close => "סגור",
            K::PlayerLoading => "טוען וידאו...",
            K::PlayerNotFound => "הוידאו לא נמצא או לא פעיל.",
            K::TapToPlay => "לחץ להפעלה",
            K::Language => "שפה",
        }),
    }
}
