//! Translation tables. English is the reference table; the other locales
//! may lag behind it and fall back per key.

pub const EN: &[(&str, &str)] = &[
    ("title.signIn", "Sign in"),
    ("label.language", "Language"),
    ("label.theme", "Theme"),
    ("label.email", "Email"),
    ("label.phone", "Phone number"),
    ("label.password", "Password"),
    ("label.name", "Name"),
    ("label.apiKey", "API key"),
    ("theme.dark", "Dark"),
    ("theme.light", "Light"),
    ("btn.continueEmail", "Continue with Email"),
    ("btn.continueGuest", "Continue as Guest"),
    ("btn.back", "Back"),
    ("btn.login", "Login"),
    ("btn.register", "Register"),
    ("btn.logout", "Logout"),
    ("btn.cancel", "Cancel"),
    ("btn.close", "Close"),
    ("btn.save", "Save"),
    ("btn.edit", "Edit"),
    ("emailOpt.login", "Log in"),
    ("emailOpt.register", "Create account"),
    ("login.method.code", "Email me a code"),
    ("login.method.password", "Use a password"),
    ("login.method.link", "Email me a link"),
    ("otp.send", "Send code"),
    ("otp.resend", "Resend"),
    ("otp.verify", "Verify"),
    ("otp.sentEmail", "Code sent. Check your inbox."),
    ("otp.sentPhone", "Code sent. Check your phone."),
    ("otp.helperEmail", "We will email you a one-time code."),
    ("otp.helperPhone", "We will text a one-time code to this number."),
    ("otp.channelEmail", "By email"),
    ("otp.channelPhone", "By phone"),
    ("otp.secretPlaceholder", "Code from email"),
    ("link.sent", "Link sent. Check your inbox."),
    ("error.emailInvalid", "Enter a valid email address"),
    ("error.phoneInvalid", "Enter a valid phone number"),
    ("error.passwordTooShort", "Password must be at least 8 characters"),
    ("error.passwordMismatch", "Passwords do not match"),
    ("error.title", "Error"),
    ("msg.signedInAs", "Signed in as"),
    ("msg.checking", "Checking authentication…"),
    ("logout.failed", "Logout failed"),
    ("logout.guestWarningTitle", "You are signed in as a guest"),
    ("logout.guestWarningBody", "Guest accounts cannot be recovered. If you log out now, your data will be lost."),
    ("logout.logoutAnyway", "Logout Anyway"),
    ("footer.privacy", "Privacy Policy"),
    ("footer.tos", "Terms of Service"),
    ("reset.title", "Reset Password"),
    ("reset.forgot", "Forgot password?"),
    ("reset.prompt", "Send a password reset link to"),
    ("reset.sendLink", "Send Reset Link"),
    ("reset.new", "New password"),
    ("reset.confirm", "Confirm password"),
    ("reset.secret", "Code from the reset email"),
    ("reset.submit", "Update Password"),
    ("reset.success", "Password updated. You can now log in."),
    ("session.expires", "Session expires"),
    ("session.none", "No active session"),
    ("session.extend", "Extend"),
    ("session.refresh", "Refresh"),
    ("setup.notSet", "not set"),
    ("setup.nameUpdated", "Name updated"),
    ("setup.emailUpdated", "Email updated"),
    ("setup.apiKeyUpdated", "API key updated"),
    ("profile.linkProviders", "Link social accounts"),
    ("advanced.title", "Advanced"),
    ("advanced.placeholder", "Type something…"),
    ("advanced.send", "Send"),
    ("advanced.output", "Output"),
];

pub const ES: &[(&str, &str)] = &[
    ("title.signIn", "Iniciar sesión"),
    ("label.language", "Idioma"),
    ("label.theme", "Tema"),
    ("label.email", "Correo"),
    ("label.phone", "Número de teléfono"),
    ("label.password", "Contraseña"),
    ("label.name", "Nombre"),
    ("label.apiKey", "Clave API"),
    ("theme.dark", "Oscuro"),
    ("theme.light", "Claro"),
    ("btn.continueEmail", "Continuar con correo"),
    ("btn.continueGuest", "Continuar como invitado"),
    ("btn.back", "Atrás"),
    ("btn.login", "Entrar"),
    ("btn.register", "Registrarse"),
    ("btn.logout", "Cerrar sesión"),
    ("btn.cancel", "Cancelar"),
    ("btn.close", "Cerrar"),
    ("btn.save", "Guardar"),
    ("btn.edit", "Editar"),
    ("emailOpt.login", "Entrar"),
    ("emailOpt.register", "Crear cuenta"),
    ("login.method.code", "Enviarme un código"),
    ("login.method.password", "Usar contraseña"),
    ("login.method.link", "Enviarme un enlace"),
    ("otp.send", "Enviar código"),
    ("otp.resend", "Reenviar"),
    ("otp.verify", "Verificar"),
    ("otp.sentEmail", "Código enviado. Revisa tu correo."),
    ("otp.sentPhone", "Código enviado. Revisa tu teléfono."),
    ("otp.helperEmail", "Te enviaremos un código de un solo uso."),
    ("otp.helperPhone", "Enviaremos un código de un solo uso a este número."),
    ("otp.channelEmail", "Por correo"),
    ("otp.channelPhone", "Por teléfono"),
    ("otp.secretPlaceholder", "Código del correo"),
    ("link.sent", "Enlace enviado. Revisa tu correo."),
    ("error.emailInvalid", "Introduce un correo válido"),
    ("error.phoneInvalid", "Introduce un número de teléfono válido"),
    ("error.passwordTooShort", "La contraseña debe tener al menos 8 caracteres"),
    ("error.passwordMismatch", "Las contraseñas no coinciden"),
    ("error.title", "Error"),
    ("msg.signedInAs", "Sesión iniciada como"),
    ("msg.checking", "Comprobando autenticación…"),
    ("logout.failed", "Error al cerrar sesión"),
    ("logout.guestWarningTitle", "Sesión de invitado"),
    ("logout.guestWarningBody", "Las cuentas de invitado no se pueden recuperar. Si cierras sesión ahora, tus datos se perderán."),
    ("logout.logoutAnyway", "Cerrar sesión igualmente"),
    ("footer.privacy", "Política de privacidad"),
    ("footer.tos", "Términos del servicio"),
    ("reset.title", "Restablecer contraseña"),
    ("reset.forgot", "¿Olvidaste tu contraseña?"),
    ("reset.prompt", "¿Enviar un enlace de restablecimiento a"),
    ("reset.sendLink", "Enviar enlace"),
    ("reset.new", "Nueva contraseña"),
    ("reset.confirm", "Confirmar contraseña"),
    ("reset.secret", "Código del correo de restablecimiento"),
    ("reset.submit", "Actualizar contraseña"),
    ("reset.success", "Contraseña actualizada. Ya puedes entrar."),
    ("session.expires", "La sesión expira"),
    ("session.none", "Sin sesión activa"),
    ("session.extend", "Extender"),
    ("session.refresh", "Actualizar"),
    ("setup.notSet", "sin definir"),
    ("setup.nameUpdated", "Nombre actualizado"),
    ("setup.emailUpdated", "Correo actualizado"),
    ("setup.apiKeyUpdated", "Clave API actualizada"),
    ("profile.linkProviders", "Vincular cuentas sociales"),
    ("advanced.title", "Avanzado"),
    ("advanced.placeholder", "Escribe algo…"),
    ("advanced.send", "Enviar"),
    ("advanced.output", "Salida"),
];

pub const FR: &[(&str, &str)] = &[
    ("title.signIn", "Connexion"),
    ("label.language", "Langue"),
    ("label.theme", "Thème"),
    ("label.email", "E-mail"),
    ("label.phone", "Numéro de téléphone"),
    ("label.password", "Mot de passe"),
    ("label.name", "Nom"),
    ("label.apiKey", "Clé API"),
    ("theme.dark", "Sombre"),
    ("theme.light", "Clair"),
    ("btn.continueEmail", "Continuer avec e-mail"),
    ("btn.continueGuest", "Continuer en invité"),
    ("btn.back", "Retour"),
    ("btn.login", "Se connecter"),
    ("btn.register", "S'inscrire"),
    ("btn.logout", "Se déconnecter"),
    ("btn.cancel", "Annuler"),
    ("btn.close", "Fermer"),
    ("btn.save", "Enregistrer"),
    ("btn.edit", "Modifier"),
    ("emailOpt.login", "Se connecter"),
    ("emailOpt.register", "Créer un compte"),
    ("login.method.code", "Recevoir un code"),
    ("login.method.password", "Utiliser un mot de passe"),
    ("login.method.link", "Recevoir un lien"),
    ("otp.send", "Envoyer le code"),
    ("otp.resend", "Renvoyer"),
    ("otp.verify", "Vérifier"),
    ("otp.sentEmail", "Code envoyé. Vérifiez votre boîte mail."),
    ("otp.sentPhone", "Code envoyé. Vérifiez votre téléphone."),
    ("otp.helperEmail", "Nous vous enverrons un code à usage unique."),
    ("otp.helperPhone", "Nous enverrons un code à usage unique à ce numéro."),
    ("otp.channelEmail", "Par e-mail"),
    ("otp.channelPhone", "Par téléphone"),
    ("otp.secretPlaceholder", "Code reçu par e-mail"),
    ("link.sent", "Lien envoyé. Vérifiez votre boîte mail."),
    ("error.emailInvalid", "Saisissez une adresse e-mail valide"),
    ("error.phoneInvalid", "Saisissez un numéro de téléphone valide"),
    ("error.passwordTooShort", "Le mot de passe doit contenir au moins 8 caractères"),
    ("error.passwordMismatch", "Les mots de passe ne correspondent pas"),
    ("error.title", "Erreur"),
    ("msg.signedInAs", "Connecté en tant que"),
    ("msg.checking", "Vérification de l'authentification…"),
    ("logout.failed", "Échec de la déconnexion"),
    ("logout.guestWarningTitle", "Session invité"),
    ("logout.guestWarningBody", "Les comptes invités ne peuvent pas être récupérés. Si vous vous déconnectez, vos données seront perdues."),
    ("logout.logoutAnyway", "Se déconnecter quand même"),
    ("footer.privacy", "Politique de confidentialité"),
    ("footer.tos", "Conditions d'utilisation"),
    ("reset.title", "Réinitialiser le mot de passe"),
    ("reset.forgot", "Mot de passe oublié ?"),
    ("reset.prompt", "Envoyer un lien de réinitialisation à"),
    ("reset.sendLink", "Envoyer le lien"),
    ("reset.new", "Nouveau mot de passe"),
    ("reset.confirm", "Confirmer le mot de passe"),
    ("reset.secret", "Code de l'e-mail de réinitialisation"),
    ("reset.submit", "Mettre à jour"),
    ("reset.success", "Mot de passe mis à jour. Vous pouvez vous connecter."),
    ("session.expires", "La session expire"),
    ("session.none", "Aucune session active"),
    ("session.extend", "Prolonger"),
    ("session.refresh", "Rafraîchir"),
    ("setup.notSet", "non défini"),
    ("setup.nameUpdated", "Nom mis à jour"),
    ("setup.emailUpdated", "E-mail mis à jour"),
    ("setup.apiKeyUpdated", "Clé API mise à jour"),
    ("profile.linkProviders", "Lier des comptes sociaux"),
    ("advanced.title", "Avancé"),
    ("advanced.placeholder", "Écrivez quelque chose…"),
    ("advanced.send", "Envoyer"),
    ("advanced.output", "Sortie"),
];

pub const DE: &[(&str, &str)] = &[
    ("title.signIn", "Anmelden"),
    ("label.language", "Sprache"),
    ("label.theme", "Design"),
    ("label.email", "E-Mail"),
    ("label.phone", "Telefonnummer"),
    ("label.password", "Passwort"),
    ("label.name", "Name"),
    ("label.apiKey", "API-Schlüssel"),
    ("theme.dark", "Dunkel"),
    ("theme.light", "Hell"),
    ("btn.continueEmail", "Weiter mit E-Mail"),
    ("btn.continueGuest", "Weiter als Gast"),
    ("btn.back", "Zurück"),
    ("btn.login", "Anmelden"),
    ("btn.register", "Registrieren"),
    ("btn.logout", "Abmelden"),
    ("btn.cancel", "Abbrechen"),
    ("btn.close", "Schließen"),
    ("btn.save", "Speichern"),
    ("btn.edit", "Bearbeiten"),
    ("emailOpt.login", "Anmelden"),
    ("emailOpt.register", "Konto erstellen"),
    ("login.method.code", "Code per E-Mail"),
    ("login.method.password", "Passwort verwenden"),
    ("login.method.link", "Link per E-Mail"),
    ("otp.send", "Code senden"),
    ("otp.resend", "Erneut senden"),
    ("otp.verify", "Bestätigen"),
    ("otp.sentEmail", "Code gesendet. Prüfe dein Postfach."),
    ("otp.sentPhone", "Code gesendet. Prüfe dein Telefon."),
    ("otp.helperEmail", "Wir senden dir einen Einmalcode per E-Mail."),
    ("otp.helperPhone", "Wir senden einen Einmalcode an diese Nummer."),
    ("otp.channelEmail", "Per E-Mail"),
    ("otp.channelPhone", "Per Telefon"),
    ("otp.secretPlaceholder", "Code aus der E-Mail"),
    ("link.sent", "Link gesendet. Prüfe dein Postfach."),
    ("error.emailInvalid", "Gib eine gültige E-Mail-Adresse ein"),
    ("error.phoneInvalid", "Gib eine gültige Telefonnummer ein"),
    ("error.passwordTooShort", "Das Passwort muss mindestens 8 Zeichen haben"),
    ("error.passwordMismatch", "Die Passwörter stimmen nicht überein"),
    ("error.title", "Fehler"),
    ("msg.signedInAs", "Angemeldet als"),
    ("msg.checking", "Anmeldung wird geprüft…"),
    ("logout.failed", "Abmelden fehlgeschlagen"),
    ("logout.guestWarningTitle", "Gastsitzung"),
    ("logout.guestWarningBody", "Gastkonten können nicht wiederhergestellt werden. Wenn du dich jetzt abmeldest, gehen deine Daten verloren."),
    ("logout.logoutAnyway", "Trotzdem abmelden"),
    ("footer.privacy", "Datenschutzerklärung"),
    ("footer.tos", "Nutzungsbedingungen"),
    ("reset.title", "Passwort zurücksetzen"),
    ("reset.forgot", "Passwort vergessen?"),
    ("reset.prompt", "Link zum Zurücksetzen senden an"),
    ("reset.sendLink", "Link senden"),
    ("reset.new", "Neues Passwort"),
    ("reset.confirm", "Passwort bestätigen"),
    ("reset.secret", "Code aus der E-Mail"),
    ("reset.submit", "Passwort aktualisieren"),
    ("reset.success", "Passwort aktualisiert. Du kannst dich jetzt anmelden."),
    ("session.expires", "Sitzung läuft ab"),
    ("session.none", "Keine aktive Sitzung"),
    ("session.extend", "Verlängern"),
    ("session.refresh", "Aktualisieren"),
    ("setup.notSet", "nicht gesetzt"),
    ("setup.nameUpdated", "Name aktualisiert"),
    ("setup.emailUpdated", "E-Mail aktualisiert"),
    ("setup.apiKeyUpdated", "API-Schlüssel aktualisiert"),
    ("profile.linkProviders", "Soziale Konten verknüpfen"),
    ("advanced.title", "Erweitert"),
    ("advanced.placeholder", "Schreib etwas…"),
    ("advanced.send", "Senden"),
    ("advanced.output", "Ausgabe"),
];
