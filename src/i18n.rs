//! Interface strings for the two supported languages.

use leptos::prelude::*;

use crate::commands::{CountdownTick, Language, Notice, Tip};

#[derive(Clone, Copy)]
pub struct LanguageContext {
    pub language: ReadSignal<Language>,
    pub set_language: WriteSignal<Language>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Title,
    CalcTitle,
    HistoryTitle,
    ToolsTitle,
    SettingsTitle,
    CountdownTitle,
    CalculatorTitle,
    PrimaryLabel,
    SecondaryLabel,
    SchemeLabel,
    SchemeStandard,
    SchemeCustom,
    SchemeOther,
    PrimaryWeight,
    SecondaryWeight,
    ResultLabel,
    CalcButton,
    SaveButton,
    ClearButton,
    ShareButton,
    ExportCsv,
    CountdownButton,
    ConfirmClear,
    NoHistory,
    NothingToExport,
    Copied,
    SessionOnly,
    LanguageLabel,
    DarkMode,
    ColDate,
    ColPrimary,
    ColSecondary,
    ColFinal,
    ColScheme,
}

pub fn t(lang: Language, key: Text) -> &'static str {
    match lang {
        Language::Az => az(key),
        Language::En => en(key),
    }
}

fn az(key: Text) -> &'static str {
    match key {
        Text::Title => "Akademik Qiymət Kalkulyatoru",
        Text::CalcTitle => "Qiymət Kalkulyatoru",
        Text::HistoryTitle => "Tarixçə",
        Text::ToolsTitle => "Alətlər",
        Text::SettingsTitle => "Tənzimləmələr",
        Text::CountdownTitle => "Geri Sayım",
        Text::CalculatorTitle => "Kalkulyator",
        Text::PrimaryLabel => "KSQ Qiymətləri (vergüllə ayırın):",
        Text::SecondaryLabel => "BSQ Qiyməti (əgər varsa):",
        Text::SchemeLabel => "Qiymətləndirmə Sistemi:",
        Text::SchemeStandard => "Standart (40/60)",
        Text::SchemeCustom => "Fərdi çəkilər",
        Text::SchemeOther => "Sadə ortalama",
        Text::PrimaryWeight => "KSQ çəkisi",
        Text::SecondaryWeight => "BSQ çəkisi",
        Text::ResultLabel => "Yekun Qiymət:",
        Text::CalcButton => "Hesabla",
        Text::SaveButton => "Saxla",
        Text::ClearButton => "Təmizlə",
        Text::ShareButton => "Paylaş",
        Text::ExportCsv => "CSV yüklə",
        Text::CountdownButton => "Başlat",
        Text::ConfirmClear => "Tarixi təmizləmək istədiyinizə əminsiniz?",
        Text::NoHistory => "Hələ saxlanmış nəticə yoxdur.",
        Text::NothingToExport => "İxrac üçün məlumat yoxdur",
        Text::Copied => "Panoya kopyalandı!",
        Text::SessionOnly => "Yaddaş əlçatan deyil: nəticə yalnız bu sessiyada qalacaq.",
        Text::LanguageLabel => "Dil",
        Text::DarkMode => "Qaranlıq rejim",
        Text::ColDate => "Tarix",
        Text::ColPrimary => "KSQ",
        Text::ColSecondary => "BSQ",
        Text::ColFinal => "Yekun",
        Text::ColScheme => "Sistem",
    }
}

fn en(key: Text) -> &'static str {
    match key {
        Text::Title => "Academic Grade Calculator",
        Text::CalcTitle => "Grade Calculator",
        Text::HistoryTitle => "History",
        Text::ToolsTitle => "Tools",
        Text::SettingsTitle => "Settings",
        Text::CountdownTitle => "Countdown",
        Text::CalculatorTitle => "Calculator",
        Text::PrimaryLabel => "KSQ Scores (comma separated):",
        Text::SecondaryLabel => "BSQ Score (if any):",
        Text::SchemeLabel => "Grading System:",
        Text::SchemeStandard => "Standard (40/60)",
        Text::SchemeCustom => "Custom weights",
        Text::SchemeOther => "Simple average",
        Text::PrimaryWeight => "KSQ weight",
        Text::SecondaryWeight => "BSQ weight",
        Text::ResultLabel => "Final Grade:",
        Text::CalcButton => "Calculate",
        Text::SaveButton => "Save",
        Text::ClearButton => "Clear",
        Text::ShareButton => "Share",
        Text::ExportCsv => "Export CSV",
        Text::CountdownButton => "Start",
        Text::ConfirmClear => "Are you sure you want to clear history?",
        Text::NoHistory => "No saved results yet.",
        Text::NothingToExport => "No data to export",
        Text::Copied => "Copied to clipboard!",
        Text::SessionOnly => "Storage unavailable: this result only lasts for this session.",
        Text::LanguageLabel => "Language",
        Text::DarkMode => "Dark mode",
        Text::ColDate => "Date",
        Text::ColPrimary => "KSQ",
        Text::ColSecondary => "BSQ",
        Text::ColFinal => "Final",
        Text::ColScheme => "Scheme",
    }
}

pub fn tip_text(lang: Language, tip: Tip) -> &'static str {
    match (lang, tip) {
        (Language::Az, Tip::Excellent) => "Möhtəşəm! Davamlı performansınızı qoruyun.",
        (Language::Az, Tip::ImprovePrimary) => "KSQ ortalamanızı yüksəltmək üçün daha çox məşq edin.",
        (Language::Az, Tip::ImproveSecondary) => "BSQ üzərində daha çox işləyin.",
        (Language::Az, Tip::EnterScores) => "Qiymətlərinizi daxil edin",
        (Language::En, Tip::Excellent) => "Excellent! Keep up the great performance.",
        (Language::En, Tip::ImprovePrimary) => "Improve your KSQ scores with more practice.",
        (Language::En, Tip::ImproveSecondary) => "Focus on improving your BSQ strategy.",
        (Language::En, Tip::EnterScores) => "Enter your scores to begin",
    }
}

pub fn notice_text(lang: Language, notice: Notice) -> &'static str {
    match (lang, notice) {
        (Language::Az, Notice::MissingPrimaryScores) => "Ən azı bir KSQ qiyməti daxil edin.",
        (Language::Az, Notice::Saved) => "Nəticə saxlandı!",
        (Language::Az, Notice::Cleared) => "Tarix təmizləndi.",
        (Language::En, Notice::MissingPrimaryScores) => "Enter at least one KSQ score.",
        (Language::En, Notice::Saved) => "Result saved!",
        (Language::En, Notice::Cleared) => "History cleared.",
    }
}

pub fn countdown_text(lang: Language, tick: CountdownTick) -> String {
    match (lang, tick) {
        (Language::Az, CountdownTick::Finished) => "0 gün".to_string(),
        (Language::En, CountdownTick::Finished) => "0 days".to_string(),
        (
            Language::Az,
            CountdownTick::Running {
                days,
                hours,
                minutes,
                seconds,
            },
        ) => format!("{}g {}sa {}dəq {}san", days, hours, minutes, seconds),
        (
            Language::En,
            CountdownTick::Running {
                days,
                hours,
                minutes,
                seconds,
            },
        ) => format!("{}d {}h {}m {}s", days, hours, minutes, seconds),
    }
}
