//! Localized message catalog.
//!
//! All client-facing strings live here rather than inline in handler or
//! service logic, so the response language is a single point of
//! configuration. The catalog is Turkish, matching the audience of the
//! vendor panel.

// Auth & tokens
pub const TOKEN_MISSING: &str = "Yetkilendirme tokenı bulunamadı";
pub const TOKEN_INVALID: &str = "Geçersiz veya süresi dolmuş token";
pub const TOKEN_WRONG_KIND: &str = "Geçersiz token tipi";
pub const VENDOR_NOT_FOUND: &str = "Satıcı bulunamadı";
pub const INVALID_CREDENTIALS: &str = "Email veya şifre hatalı";
pub const CURRENT_PASSWORD_WRONG: &str = "Mevcut şifre hatalı";

// Registration & profile
pub const EMAIL_TAKEN: &str = "Bu email adresi zaten kayıtlı";
pub const PASSWORD_TOO_SHORT: &str = "Şifre en az 6 karakter olmalıdır";
pub const PASSWORD_TOO_LONG: &str = "Şifre çok uzun";
pub const TAX_SHEET_REQUIRED: &str = "Vergi levhası zorunludur";
pub const REGISTER_SUCCESS: &str = "Kayıt başarılı. Hesabınız inceleme aşamasındadır.";
pub const LOGIN_SUCCESS: &str = "Giriş başarılı";
pub const PASSWORD_UPDATED: &str = "Şifre başarıyla güncellendi";
pub const PROFILE_UPDATED: &str = "Profil güncellendi";

// Vendor status gate
pub const STATUS_NOT_APPROVED: &str = "Hesabınız henüz onaylanmadı";
pub const STATUS_PENDING_REVIEW: &str = "Hesabınız inceleme aşamasında. Lütfen onay bekleyiniz.";
pub const STATUS_REJECTED_PREFIX: &str = "Hesabınız reddedildi. Sebep: ";
pub const STATUS_REJECTION_UNSPECIFIED: &str = "Belirtilmemiş";
pub const STATUS_SUSPENDED: &str = "Hesabınız askıya alınmıştır.";

// Products
pub const PRODUCT_NOT_FOUND: &str = "Ürün bulunamadı";
pub const PRODUCT_CREATED: &str = "Ürün oluşturuldu";
pub const PRODUCT_UPDATED: &str = "Ürün güncellendi";
pub const PRODUCT_DELETED: &str = "Ürün silindi";

// Orders
pub const ORDER_NOT_FOUND: &str = "Sipariş bulunamadı";
pub const ORDER_STATUS_UPDATED: &str = "Sipariş durumu güncellendi";

// Support
pub const TICKET_NOT_FOUND: &str = "Destek talebi bulunamadı";
pub const TICKET_CREATED: &str = "Destek talebi oluşturuldu";

// Generic
pub const VALIDATION_FAILED: &str = "Doğrulama hatası";
pub const ROUTE_NOT_FOUND: &str = "Kaynak bulunamadı";
pub const INTERNAL_ERROR: &str = "Sunucu hatası";
pub const SERVICE_UNAVAILABLE: &str = "Servis geçici olarak kullanılamıyor";
