//! User-facing labels for the command line front end.
//!
//! The interface language is chosen independently of the generation locale:
//! Arabic labels can sit on top of Japanese records.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiLocale {
    #[default]
    En,
    Ar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

#[derive(Debug)]
pub struct UiStrings {
    pub title: &'static str,
    pub tagline: &'static str,
    pub count: &'static str,
    pub locale: &'static str,
    pub format: &'static str,
    pub fields: &'static str,
    pub generate: &'static str,
    pub copy: &'static str,
    pub download: &'static str,
    pub preview: &'static str,
    pub no_preview: &'static str,
    pub generation_failed: &'static str,
    pub generate_first: &'static str,
    pub copied: &'static str,
    pub copy_failed: &'static str,
    pub download_failed: &'static str,
    pub saved_to: &'static str,
}

static EN_STRINGS: UiStrings = UiStrings {
    title: "FormFillr",
    tagline: "Generate realistic fake user data for testing",
    count: "Number of records",
    locale: "Data locale",
    format: "Output format",
    fields: "Fields",
    generate: "Generate",
    copy: "Copy",
    download: "Download",
    preview: "Preview",
    no_preview: "No preview. Generate some records first.",
    generation_failed: "Generation error",
    generate_first: "Generate first",
    copied: "Copied to clipboard",
    copy_failed: "Copy failed",
    download_failed: "Download failed",
    saved_to: "Saved to",
};

static AR_STRINGS: UiStrings = UiStrings {
    title: "فورم فيلر",
    tagline: "أنشئ بيانات مستخدمين وهمية واقعية للاختبار",
    count: "عدد السجلات",
    locale: "لغة البيانات",
    format: "صيغة الإخراج",
    fields: "الحقول",
    generate: "إنشاء",
    copy: "نسخ",
    download: "تنزيل",
    preview: "معاينة",
    no_preview: "لا توجد معاينة. أنشئ بعض السجلات أولاً.",
    generation_failed: "خطأ في الإنشاء",
    generate_first: "أنشئ البيانات أولاً",
    copied: "تم النسخ",
    copy_failed: "فشل النسخ",
    download_failed: "فشل التنزيل",
    saved_to: "تم الحفظ في",
};

impl UiLocale {
    pub const ALL: [UiLocale; 2] = [UiLocale::En, UiLocale::Ar];

    pub fn as_str(self) -> &'static str {
        match self {
            UiLocale::En => "en",
            UiLocale::Ar => "ar",
        }
    }

    /// Anything other than a supported tag (region suffixes allowed) means English.
    pub fn from_tag(tag: &str) -> UiLocale {
        let lang = tag.trim().split(['-', '_']).next().unwrap_or("");
        match lang.to_ascii_lowercase().as_str() {
            "ar" => UiLocale::Ar,
            _ => UiLocale::En,
        }
    }
}

pub fn strings(locale: UiLocale) -> &'static UiStrings {
    match locale {
        UiLocale::En => &EN_STRINGS,
        UiLocale::Ar => &AR_STRINGS,
    }
}

pub fn direction(locale: UiLocale) -> TextDirection {
    match locale {
        UiLocale::Ar => TextDirection::Rtl,
        UiLocale::En => TextDirection::Ltr,
    }
}
