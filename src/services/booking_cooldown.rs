//! Enfriamiento entre reservas
//!
//! Tras una petición de transporte correcta, el mismo usuario no puede pedir
//! otra hasta que pase la ventana configurada. La tabla vive en memoria del
//! proceso; reiniciar el servidor la vacía.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::utils::errors::{AppError, AppResult};

#[derive(Debug)]
pub struct BookingCooldown {
    window: Duration,
    last_booking: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl BookingCooldown {
    pub fn new(window_secs: u64) -> Self {
        let secs = i64::try_from(window_secs)
            .unwrap_or(i64::MAX)
            .min(i64::MAX / 1000);
        Self {
            window: Duration::seconds(secs),
            last_booking: Mutex::new(HashMap::new()),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.window > Duration::zero()
    }

    /// Segundos que le quedan al usuario, si está dentro de la ventana
    pub fn remaining(&self, user_id: &str, now: DateTime<Utc>) -> AppResult<Option<i64>> {
        if !self.is_enabled() {
            return Ok(None);
        }
        let table = self
            .last_booking
            .lock()
            .map_err(|_| AppError::Internal("booking cooldown table poisoned".to_string()))?;

        Ok(table.get(user_id).and_then(|last| {
            let ready_at = last.checked_add_signed(self.window)?;
            (now < ready_at).then(|| (ready_at - now).num_seconds().max(1))
        }))
    }

    pub fn check(&self, user_id: &str, now: DateTime<Utc>) -> AppResult<()> {
        match self.remaining(user_id, now)? {
            Some(secs) => Err(AppError::RateLimitExceeded(format!(
                "Please wait {} seconds before requesting another journey",
                secs
            ))),
            None => Ok(()),
        }
    }

    pub fn record(&self, user_id: &str, at: DateTime<Utc>) -> AppResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }
        let mut table = self
            .last_booking
            .lock()
            .map_err(|_| AppError::Internal("booking cooldown table poisoned".to_string()))?;
        table.insert(user_id.to_string(), at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_inside_window() {
        let cooldown = BookingCooldown::new(300);
        let t0 = Utc::now();
        cooldown.record("u1", t0).unwrap();

        let err = cooldown.check("u1", t0 + Duration::seconds(60)).unwrap_err();
        assert_eq!(err.code(), "RATE_LIMIT_EXCEEDED");
        assert!(err.to_string().contains("240 seconds"));

        assert!(cooldown.check("u2", t0).is_ok());
    }

    #[test]
    fn test_allows_after_window() {
        let cooldown = BookingCooldown::new(300);
        let t0 = Utc::now();
        cooldown.record("u1", t0).unwrap();

        assert!(cooldown.check("u1", t0 + Duration::seconds(300)).is_ok());
    }

    #[test]
    fn test_zero_window_disables() {
        let cooldown = BookingCooldown::new(0);
        let t0 = Utc::now();
        cooldown.record("u1", t0).unwrap();
        assert!(cooldown.check("u1", t0).is_ok());
    }
}
